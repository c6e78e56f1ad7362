/// Output flavour, fixed for a whole top-level call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Plain,
    /// Emit markup tags around styled fragments
    Color,
}

impl Mode {
    pub fn from_color(enable_color: bool) -> Self {
        if enable_color { Mode::Color } else { Mode::Plain }
    }

    pub fn is_color(&self) -> bool {
        matches!(self, Mode::Color)
    }
}

/// Remaining expansion budget for a presentation call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Depth {
    #[default]
    Unbounded,
    Limited(usize),
}

impl Depth {
    /// `true` when the value must be rendered as a reference only
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Depth::Limited(0))
    }

    /// Budget for values one level further down
    pub fn descend(&self) -> Depth {
        match self {
            Depth::Unbounded => Depth::Unbounded,
            Depth::Limited(n) => Depth::Limited(n.saturating_sub(1)),
        }
    }
}

impl From<Option<usize>> for Depth {
    fn from(depth: Option<usize>) -> Self {
        depth.map_or(Depth::Unbounded, Depth::Limited)
    }
}

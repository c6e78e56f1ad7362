//! # Presenters
//!
//! Turns runtime values into display text for the shell's result echo.
//!
//! ## Data Flow
//!
//! ```text
//! [ Shell ] --> [ PresenterRegistry ] --> [ Presenter ] --(nested values)--+
//!                      ^                                                   |
//!                      +------------------ depth - 1 ----------------------+
//! ```
//!
//! The registry picks the first presenter whose `can_present` accepts the
//! value. Structured presenters (objects, arrays) render their entries by
//! handing each nested value back to the registry with one less unit of
//! depth. A depth of zero renders a one-line reference and stops.
//!
//! ## Rules
//!
//! * **Depth is the only cycle guard.** An unbounded budget on a cyclic
//!   graph recurses until the stack runs out. Shells should pass a finite
//!   depth.
//! * **Mode is fixed per call.** `Mode::Color` emits markup tags (see
//!   [`markup`]); turning them into terminal escapes is the caller's job.
//! * **Failures abort the call.** A nested failure fails the whole
//!   top-level presentation; no partial text is returned.

pub mod array;
pub mod error;
pub mod identity;
pub mod markup;
pub mod mode;
pub mod object;
pub mod presenter;
pub mod properties;
pub mod recursive;
pub mod registry;
pub mod scalar;

pub use array::ArrayPresenter;
pub use error::{PresentError, Result};
pub use mode::{Depth, Mode};
pub use object::ObjectPresenter;
pub use presenter::{Present, Presenter};
pub use registry::PresenterRegistry;
pub use scalar::ScalarPresenter;

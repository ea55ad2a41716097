//! Drawing primitives shared by every Primer surface.
//!
//! # Overview
//!
//! - [`Surface`]: the stateful primitive-drawing collaborator
//! - [`DrawState`], [`Font`], [`FontFace`]: the ambient state a surface carries
//! - [`Path`], [`PathBuilder`], [`Paint`]: line and cubic-curve paths
//! - [`StyleGuard`]: scoped access to a surface that restores draw state on drop
//! - [`RecordingSurface`], [`DrawCommand`]: an in-memory surface that records
//!   every primitive call

mod guard;
mod path;
mod recording;
mod state;
mod surface;

pub use guard::StyleGuard;
pub use path::{Paint, Path, PathBuilder, PathSegment};
pub use recording::{DrawCommand, RecordingSurface};
pub use state::{DrawState, Font, FontFace};
pub use surface::{Surface, SurfaceError};

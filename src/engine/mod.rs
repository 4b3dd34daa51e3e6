mod stroke;
pub use stroke::*;

mod capture;
pub use capture::*;

mod drawing;
pub use drawing::*;

mod plane;
pub use plane::*;

mod session;
pub use session::*;

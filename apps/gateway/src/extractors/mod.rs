pub mod session;
pub mod validated_json;

pub use session::{MaybeSession, SessionToken};
pub use validated_json::{OptionalJson, ValidatedJson};

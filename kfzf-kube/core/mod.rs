pub use self::kind::{ResourceKind, UnknownKindError, split_api_version};

mod kind;

mod context;

pub use self::context::{BoxFut, Context, Handle};

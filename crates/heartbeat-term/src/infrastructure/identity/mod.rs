mod local;

pub use local::LocalIdentity;

pub mod activity;
pub mod directory;

pub use activity::Activity;
pub use directory::ActivityDirectory;

mod page;
pub use self::page::{Page, Paging};

mod cloudcast;
pub use self::cloudcast::{Cloudcast, Pictures, Tag, User};

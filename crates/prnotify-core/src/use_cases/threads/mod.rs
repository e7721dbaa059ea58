pub(crate) mod find_thread;
pub(crate) mod post_status_message;
pub mod utils;

pub use find_thread::{FindThreadInterface, ThreadHandle};
pub use post_status_message::{PostStatusMessageInterface, ThreadWrite};
pub use utils::marker::THREAD_EVENT_TYPE;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    find_thread::MockFindThreadInterface, post_status_message::MockPostStatusMessageInterface,
};

pub(crate) mod handle_event;
pub(crate) mod notify_deploy_complete;
pub mod utils;

pub use handle_event::{HandleEventInterface, NotifyOutcome, SkipReason};
pub use notify_deploy_complete::NotifyDeployCompleteInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    handle_event::MockHandleEventInterface,
    notify_deploy_complete::MockNotifyDeployCompleteInterface,
};

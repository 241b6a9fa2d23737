pub mod sender;
pub mod telegram;

pub use sender::{Notifier, NotifyError};
pub use telegram::{ChannelError, MessageChannel, TelegramChannel};

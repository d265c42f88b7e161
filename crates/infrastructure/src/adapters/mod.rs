//! Port adapters backed by the network, the terminal and the system clock.

mod console_navigator;
mod reqwest_client;
mod system_clock;

pub use console_navigator::ConsoleNavigator;
pub use reqwest_client::ReqwestHttpClient;
pub use system_clock::SystemClock;

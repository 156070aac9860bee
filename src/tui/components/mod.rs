//! # TUI Components
//!
//! Components here follow two patterns:
//!
//! - **Stateless (props-based)**: receive all data from the parent each
//!   frame and render it — `TitleBar`, `Message`, `LandingPage`.
//! - **Stateful (event-driven)**: keep local state across frames and emit
//!   high-level events — `InputBox` (buffer + cursor), `MessageList`
//!   (scroll position + layout cache).
//!
//! Each component file is self-contained: state types, event types,
//! rendering, event handling, and tests live together.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar with spinner)
//! ├── message.rs       (Single transcript entry renderer)
//! ├── message_list.rs  (Scrollable transcript container)
//! ├── landing.rs       (Welcome page with quick questions)
//! └── input_box/       (Single-line question input)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod input_box;
pub mod message;
pub use input_box::{InputBox, InputEvent};
pub mod message_list;
pub use message_list::{MessageList, MessageListState};
pub mod landing;
pub use landing::LandingPage;

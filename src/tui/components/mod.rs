//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `HeaderBar`: Top bar with identity, status, and shortcut hints
//! - `HeroScreen`: Empty-transcript landing view with the rotating headline
//! - `Avatar`: ASCII-art portrait
//! - `MessageBubble`: Individual conversation message rendering
//! - `SuggestionBar`: Row(s) of clickable follow-up pills
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: Text composer with placeholder and internal scrolling
//! - `Transcript`: Scrollable conversation view with layout caching
//!
//! ## Design Philosophy
//!
//! ### Composition Over Inheritance
//!
//! Components compose naturally. `Transcript` renders `MessageBubble` and
//! `SuggestionBar` components; `HeroScreen` renders `Avatar` and
//! `SuggestionBar`. This mirrors React's component model.
//!
//! ### Co-location of Concerns
//!
//! Each component file contains everything related to that component:
//! - State types
//! - Event types
//! - Rendering logic
//! - Event handling
//! - Tests
//!
//! **Why:** Makes components self-contained and easy to understand. You can
//! read one file to understand how a component works, rather than jumping
//! between multiple files.
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (function parameters), not by
//! directly accessing global state. This makes dependencies explicit and
//! components testable.
//!
//! ### Shared Geometry for Hit Testing
//!
//! Mouse support needs to map a click back to the pill that was painted
//! there. Components that render clickable regions expose the same layout
//! math as a pure function (`SuggestionBar::hit_test`, `transcript::pill_at`,
//! `hero::pill_hit`) so the click path can never drift from the paint
//! path.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (Top bar)
//! ├── hero.rs          (Landing view)
//! ├── avatar.rs        (ASCII portrait)
//! ├── message.rs       (Single bubble renderer)
//! ├── suggestions.rs   (Follow-up pills)
//! ├── transcript.rs    (Scrollable conversation container)
//! └── input_box/       (Text composer)
//! ```

pub mod avatar;
pub mod header;
pub mod hero;
pub mod input_box;
pub mod message;
pub mod suggestions;
pub mod transcript;

pub use avatar::Avatar;
pub use header::HeaderBar;
pub use hero::HeroScreen;
pub use input_box::{InputBox, InputEvent};
pub use message::MessageBubble;
pub use suggestions::SuggestionBar;
pub use transcript::{Transcript, TranscriptState};

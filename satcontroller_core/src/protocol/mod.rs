// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Line-oriented command protocol spoken by rotator-control software (GS-232 subset).

pub mod messages;
pub mod parser;
pub mod response;

pub use messages::Command;
pub use parser::{parse_line, LineBuffer};
pub use response::Response;

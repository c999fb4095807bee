//! Theme module for soundboard-tui
//!
//! Centralized color palette: teal section headers over a black list, with
//! a dark gray highlight for the row that is playing.

use ratatui::style::Color;
use ratatui::symbols::border;

// ============================================================================
// Background Colors
// ============================================================================

/// List background (#000000)
pub const BG_PRIMARY: Color = Color::Rgb(0, 0, 0);

/// Status bar background (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Background of the row that is playing (#404040)
pub const BG_SELECTED: Color = Color::Rgb(64, 64, 64);

// ============================================================================
// Accent Colors
// ============================================================================

/// Section header color (#00afc8)
pub const THEME_TEAL: Color = Color::Rgb(0, 175, 200);

/// Darker teal for the avatar badge (#007a8c)
pub const THEME_TEAL_DIM: Color = Color::Rgb(0, 122, 140);

/// Playing indicator (#22c55e)
pub const GREEN_ACTIVE: Color = Color::Rgb(34, 197, 94);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color (#ffffff)
pub const TEXT_PRIMARY: Color = Color::Rgb(255, 255, 255);

/// Muted text color - for hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

//! Color palette: amber accents on a dark background.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Card/panel backgrounds
pub const POPUP_BG: Color = Color::Rgb(28, 24, 18); // Details overlay

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Unselected cards, panels
pub const BORDER_ACTIVE: Color = Color::Rgb(245, 158, 11); // Selected card, focused input

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(245, 158, 11); // Title, prices (amber-500)
pub const ACCENT_DIM: Color = Color::Rgb(180, 83, 9); // Tagline (amber-700)

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STAR: Color = Color::Yellow; // Rating star
pub const STATUS_RED: Color = Color::Red; // Load diagnostic
pub const KEY_HINT: Color = Color::Yellow; // Keybinding labels

// Host-side tuning and DOM contract for the profile card.

// Mount animation: start off-centre near the top-right, then ease to centre
pub const INITIAL_DURATION_MS: u64 = 1200;
pub const INITIAL_X_OFFSET: f64 = 70.0; // px in from the right edge
pub const INITIAL_Y_OFFSET: f64 = 60.0; // px down from the top edge

// How long the `entering` class stays on after the pointer enters
pub const ENTER_TRANSITION_MS: i32 = 180;

// Euclidean distance (px) at which a pointer-leave return counts as settled
pub const LEAVE_SETTLE_RADIUS_PX: f64 = 0.6;

// Markup contract
pub const CARD_SELECTOR: &str = "[data-profile-card]";
pub const SHELL_SELECTOR: &str = ".pc-card-shell";
pub const CONTACT_BUTTON_SELECTOR: &str = ".pc-contact-btn";
pub const FLIP_SELECTOR: &str = "[data-card-flip]";
// Pointer activity that starts on these never moves the tilt
pub const CONTROL_SELECTOR: &str = ".pc-contact-btn, .pc-back a";

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_ENTERING: &str = "entering";
pub const CLASS_FLIPPED: &str = "flipped";

use std::f32::consts::FRAC_PI_4;
use std::time::Duration;

/// Scene tuning constants shared by the simulation and its host tests.
///
/// Ranges are half-open `[MIN, MAX)` unless noted otherwise.
// Starfield
pub const STAR_COUNT: usize = 300;
pub const STAR_RADIUS_MIN: f32 = 0.5;
pub const STAR_RADIUS_MAX: f32 = 2.0; // inclusive
pub const STAR_ALPHA_STEP_MIN: f32 = 0.005;
pub const STAR_ALPHA_STEP_MAX: f32 = 0.025;
pub const STAR_COLOR: &str = "#ffffff";

// Shooting stars
pub const SHOOTING_LENGTH_MIN: f32 = 100.0;
pub const SHOOTING_LENGTH_MAX: f32 = 400.0;
pub const SHOOTING_SPEED_MIN: f32 = 6.0;
pub const SHOOTING_SPEED_MAX: f32 = 16.0;
pub const SHOOTING_ANGLE: f32 = FRAC_PI_4; // fixed 45° descent
pub const SHOOTING_FADE_PER_FRAME: f32 = 0.01;
pub const SHOOTING_LINE_WIDTH: f32 = 2.0;
pub const SHOOTING_SPAWN_PERIOD: Duration = Duration::from_millis(500);

// Falling elements
pub const FOCAL_LENGTH: f32 = 300.0;
pub const SPAWN_DEPTH_MIN_FACTOR: f32 = 1.5; // × focal length
pub const SPAWN_DEPTH_MAX_FACTOR: f32 = 5.0; // × focal length, inclusive
pub const SPAWN_AREA_BUFFER: f32 = 1.1; // 10% wider than the far field of view
pub const PHRASE_BASE_SIZE: f32 = 30.0;
pub const IMAGE_BASE_SIZE: f32 = 50.0;
pub const APPROACH_SPEED_MIN: f32 = 2.0;
pub const APPROACH_SPEED_MAX: f32 = 7.0;
pub const PHRASE_WEIGHT: f32 = 0.6;
pub const SPARKLE_WEIGHT: f32 = 0.2; // remainder goes to keepsakes
pub const GLOW_BLUR_PER_SCALE: f32 = 5.0;
pub const INITIAL_FALLING_COUNT: usize = 50;
pub const MAX_FALLING_COUNT: usize = 200;
pub const FALLING_SPAWN_PERIOD: Duration = Duration::from_millis(100);

// Camera
pub const ZOOM_MIN: f32 = 0.1;
pub const ZOOM_MAX: f32 = 5.0;
pub const ZOOM_STEP: f32 = 0.1;

// Timers never replay more than this many fires in a single advance.
pub const TIMER_MAX_CATCH_UP: u32 = 4;

// Background gradient, top to bottom
pub const BACKGROUND_TOP: &str = "#0a0a23";
pub const BACKGROUND_BOTTOM: &str = "#0c0004ff";

// Phrase colour cycle
pub const PALETTE_STEP_PER_FRAME: f32 = 0.005;
pub const TEXT_PALETTE: &[&str] = &[
    "#FFD700", // gold
    "#FFA500", // orange
    "#ADFF2F", // green-yellow
    "#00FFFF", // cyan
    "#FF69B4", // hot pink
    "#FFFFFF", // white
    "#9932CC", // purple
];

pub const PHRASES: &[&str] = &[
    "Feliz vuelta al sol",
    "Bienvenidos los 20",
    "Bella",
    "Que brille tu esencia hoy y siempre",
    "Tus lindos 20",
    "Que la pases bonito",
    "Te quiero",
];

pub const SPARKLE_IMAGES: &[&str] = &[
    "https://png.pngtree.com/png-vector/20220619/ourmid/pngtree-sparkling-star-vector-icon-glitter-star-shape-png-image_5228522.png",
];

pub const KEEPSAKE_IMAGES: &[&str] = &["1.png", "2.jpeg", "3.jpeg"];

// Cursor trail
pub const TRAIL_FOLLOW_EASE: f32 = 0.1;
pub const TRAIL_HOMING_EASE: f32 = 0.05;
pub const TRAIL_FOLLOW_DURATION: Duration = Duration::from_secs(10);
pub const TRAIL_HOME_Y: f32 = 120.0;
pub const TRAIL_ARRIVE_DISTANCE: f32 = 5.0;
pub const TRAIL_PARTICLE_LIFETIME: Duration = Duration::from_millis(2500);
pub const TRAIL_PARTICLE_RADIUS: f32 = 3.0;
pub const TRAIL_PARTICLE_DRIFT: f32 = 5.0;
pub const TRAIL_DOT_RADIUS: f32 = 6.0;
pub const TRAIL_DOT_COLOR: &str = "#ffffff";
pub const TRAIL_COLORS: &[&str] = &[
    "#ff4d4d", "#ffa64d", "#ffff66", "#66ff66", "#66ccff", "#cc66ff",
];

// Reveal choreography
pub const INTRO_START: Duration = Duration::from_secs(2);
pub const STRAP_FALLBACK: Duration = Duration::from_secs(14);
pub const MESSAGE_HOLD: Duration = Duration::from_secs(5);
pub const MESSAGE_FADE_GAP: Duration = Duration::from_millis(500);

// Typewriter pacing
pub const TYPE_CHAR_DELAY: Duration = Duration::from_millis(25);
pub const TYPE_LINE_PAUSE: Duration = Duration::from_millis(400);

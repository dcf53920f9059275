pub mod asset;
pub mod camera;
pub mod color;
pub mod constants;
pub mod falling;
pub mod reveal;
pub mod scene;
pub mod shooting;
pub mod starfield;
pub mod surface;
pub mod ticker;
pub mod trail;
pub mod typewriter;

pub use asset::{AssetError, AssetEvent, AssetId, AssetState, ImageLoader};
pub use camera::Camera;
pub use color::{interpolate_color, ColorCycle, ColorError, Rgb};
pub use reveal::{Cue, GreetingSequence};
pub use scene::{SkyParams, SkyScene};
pub use surface::{Surface, Viewport};
pub use typewriter::TypeStep;

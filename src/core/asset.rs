use thiserror::Error;

/// Identity of one image request. Load callbacks refer to elements by this,
/// never by position, because the field reorders on every recycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AssetState {
    #[default]
    Pending,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("failed to load image {url}")]
    Load { url: String },
}

/// Completion notice delivered by a loader, applied on the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetEvent {
    Loaded(AssetId),
    Failed(AssetId, AssetError),
}

impl AssetEvent {
    pub fn asset(&self) -> AssetId {
        match self {
            AssetEvent::Loaded(id) | AssetEvent::Failed(id, _) => *id,
        }
    }
}

/// Starts and releases image fetches on behalf of the falling-element field.
///
/// `load` must not complete synchronously: results are reported later as
/// [`AssetEvent`]s. `release` is called once an element no longer needs its
/// image (recycled or failed); late events for released ids are ignored.
pub trait ImageLoader {
    fn load(&mut self, asset: AssetId, url: &str);
    fn release(&mut self, asset: AssetId);
}

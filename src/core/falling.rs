use super::asset::{AssetEvent, AssetId, AssetState, ImageLoader};
use super::camera::Camera;
use super::constants::{
    APPROACH_SPEED_MAX, APPROACH_SPEED_MIN, GLOW_BLUR_PER_SCALE, IMAGE_BASE_SIZE, KEEPSAKE_IMAGES,
    PHRASES, PHRASE_BASE_SIZE, PHRASE_WEIGHT, SPARKLE_IMAGES, SPARKLE_WEIGHT, SPAWN_AREA_BUFFER,
    SPAWN_DEPTH_MAX_FACTOR, SPAWN_DEPTH_MIN_FACTOR,
};
use super::surface::{Surface, Viewport};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Phrase,
    /// Decorative sparkle sprite.
    Sparkle,
    /// Image from the alternate (keepsake) pool.
    Keepsake,
}

impl ElementKind {
    /// Map a uniform roll in `[0, 1)` onto the 60/20/20 kind weights.
    #[inline]
    pub fn from_roll(roll: f32) -> Self {
        if roll < PHRASE_WEIGHT {
            ElementKind::Phrase
        } else if roll < PHRASE_WEIGHT + SPARKLE_WEIGHT {
            ElementKind::Sparkle
        } else {
            ElementKind::Keepsake
        }
    }

    pub fn base_size(self) -> f32 {
        match self {
            ElementKind::Phrase => PHRASE_BASE_SIZE,
            ElementKind::Sparkle | ElementKind::Keepsake => IMAGE_BASE_SIZE,
        }
    }
}

/// Center-biased sample in `[-0.5, 0.5)` from two uniforms in `[0, 1)`.
#[inline]
pub fn triangular(u1: f32, u2: f32) -> f32 {
    (u1 + u2 - 1.0) * 0.5
}

#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Text(&'static str),
    Image { asset: AssetId, state: AssetState },
}

#[derive(Clone, Debug)]
pub struct FallingElement {
    pub kind: ElementKind,
    pub payload: Payload,
    pub position: Vec2,
    pub depth: f32,
    pub base_size: f32,
    pub speed: f32,
}

impl FallingElement {
    pub fn asset(&self) -> Option<AssetId> {
        match self.payload {
            Payload::Image { asset, .. } => Some(asset),
            Payload::Text(_) => None,
        }
    }

    fn has_failed(&self) -> bool {
        matches!(
            self.payload,
            Payload::Image {
                state: AssetState::Failed,
                ..
            }
        )
    }
}

/// Static payload pools a field draws from.
#[derive(Clone, Copy, Debug)]
pub struct FieldContent {
    pub phrases: &'static [&'static str],
    pub sparkle_images: &'static [&'static str],
    pub keepsake_images: &'static [&'static str],
}

impl Default for FieldContent {
    fn default() -> Self {
        Self {
            phrases: PHRASES,
            sparkle_images: SPARKLE_IMAGES,
            keepsake_images: KEEPSAKE_IMAGES,
        }
    }
}

/// Perspective field of phrases and images drifting toward the viewer.
pub struct FallingField {
    elements: Vec<FallingElement>,
    focal_length: f32,
    content: FieldContent,
    next_asset: u64,
}

impl FallingField {
    pub fn new(focal_length: f32, content: FieldContent) -> Self {
        Self {
            elements: Vec::new(),
            focal_length,
            content,
            next_asset: 0,
        }
    }

    pub fn elements(&self) -> &[FallingElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    pub fn contains_asset(&self, asset: AssetId) -> bool {
        self.elements.iter().any(|e| e.asset() == Some(asset))
    }

    pub fn depth_range(&self) -> (f32, f32) {
        (
            self.focal_length * SPAWN_DEPTH_MIN_FACTOR,
            self.focal_length * SPAWN_DEPTH_MAX_FACTOR,
        )
    }

    /// World-space width/height of the spawn rectangle: the far-plane field of
    /// view plus a margin so sprites can drift in from the edges.
    pub fn spawn_extent(&self, viewport: Viewport) -> Vec2 {
        let (_, max_z) = self.depth_range();
        Vec2::new(viewport.width(), viewport.height()) / self.focal_length * max_z * SPAWN_AREA_BUFFER
    }

    pub fn spawn<R, L>(&mut self, viewport: Viewport, rng: &mut R, loader: &mut L)
    where
        R: Rng,
        L: ImageLoader + ?Sized,
    {
        let mut kind = ElementKind::from_roll(rng.gen::<f32>());
        let mut pool = match kind {
            ElementKind::Phrase => self.content.phrases,
            ElementKind::Sparkle => self.content.sparkle_images,
            ElementKind::Keepsake => self.content.keepsake_images,
        };
        // Empty image pool: nothing to fetch, spawn a phrase instead.
        if kind != ElementKind::Phrase && pool.is_empty() {
            kind = ElementKind::Phrase;
            pool = self.content.phrases;
        }
        let (min_z, max_z) = self.depth_range();
        let depth = rng.gen_range(min_z..=max_z);
        let extent = self.spawn_extent(viewport);
        let position = Vec2::new(
            triangular(rng.gen(), rng.gen()) * extent.x,
            triangular(rng.gen(), rng.gen()) * extent.y,
        );

        let payload = match pick(pool, rng) {
            Some(url) if kind != ElementKind::Phrase => {
                let asset = AssetId(self.next_asset);
                self.next_asset += 1;
                loader.load(asset, url);
                Payload::Image {
                    asset,
                    state: AssetState::Pending,
                }
            }
            text => Payload::Text(text.unwrap_or("")),
        };

        self.elements.push(FallingElement {
            kind,
            payload,
            position,
            depth,
            base_size: kind.base_size(),
            speed: rng.gen_range(APPROACH_SPEED_MIN..APPROACH_SPEED_MAX),
        });
    }

    /// Advance, draw and recycle every element. Returns the number recycled;
    /// each one was replaced in the same call, so the population is unchanged.
    pub fn update_and_draw<R, L, S>(
        &mut self,
        camera: &Camera,
        viewport: Viewport,
        text_color: &str,
        rng: &mut R,
        loader: &mut L,
        surface: &mut S,
    ) -> usize
    where
        R: Rng,
        L: ImageLoader + ?Sized,
        S: Surface + ?Sized,
    {
        let zoom = camera.zoom();
        let focal_length = self.focal_length;
        let mut recycled = 0;

        // Reverse walk: replacements are pushed past the cursor and wait a frame.
        let mut i = self.elements.len();
        while i > 0 {
            i -= 1;
            let depth = {
                let el = &mut self.elements[i];
                el.depth -= el.speed * zoom;
                el.depth
            };
            if depth <= 0.0 {
                self.recycle(i, viewport, rng, loader);
                recycled += 1;
                continue;
            }

            let el = &self.elements[i];
            let proj = camera.project(el.position, depth, focal_length, viewport);
            let size = el.base_size * proj.scale * zoom;
            let alpha = proj.scale.clamp(0.0, 1.0);
            match el.payload {
                Payload::Text(text) => surface.fill_glow_text(
                    text,
                    proj.screen,
                    size,
                    text_color,
                    alpha,
                    GLOW_BLUR_PER_SCALE * proj.scale,
                ),
                Payload::Image {
                    asset,
                    state: AssetState::Ready,
                } => surface.draw_image(asset, proj.screen, size, alpha),
                Payload::Image { .. } => {}
            }

            if viewport.square_outside(proj.screen, size * 0.5) && depth > focal_length {
                self.recycle(i, viewport, rng, loader);
                recycled += 1;
            }
        }
        recycled
    }

    /// Apply a loader notice to the element owning `event.asset()`.
    ///
    /// Returns `true` when the element was dropped because its image failed.
    /// The field is not refilled here; the next spawn tick does that.
    pub fn apply_asset_event<L>(&mut self, event: &AssetEvent, loader: &mut L) -> bool
    where
        L: ImageLoader + ?Sized,
    {
        let target = event.asset();
        let Some(el) = self.elements.iter_mut().find(|e| e.asset() == Some(target)) else {
            return false;
        };
        let Payload::Image { state, .. } = &mut el.payload else {
            return false;
        };
        match event {
            AssetEvent::Loaded(_) => {
                *state = AssetState::Ready;
                false
            }
            AssetEvent::Failed(..) => {
                *state = AssetState::Failed;
                self.elements.retain(|e| !e.has_failed());
                loader.release(target);
                true
            }
        }
    }

    fn recycle<R, L>(&mut self, index: usize, viewport: Viewport, rng: &mut R, loader: &mut L)
    where
        R: Rng,
        L: ImageLoader + ?Sized,
    {
        let old = self.elements.remove(index);
        if let Some(asset) = old.asset() {
            loader.release(asset);
        }
        self.spawn(viewport, rng, loader);
    }
}

#[inline]
fn pick<R: Rng>(pool: &'static [&'static str], rng: &mut R) -> Option<&'static str> {
    if pool.is_empty() {
        None
    } else {
        Some(pool[rng.gen_range(0..pool.len())])
    }
}

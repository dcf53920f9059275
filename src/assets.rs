use crate::core::{AssetError, AssetEvent, AssetId, ImageLoader};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An `<img>` in flight or loaded, together with the callbacks it owns.
pub struct TrackedImage {
    pub element: web::HtmlImageElement,
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

pub type ImageRegistry = Rc<RefCell<FnvHashMap<AssetId, TrackedImage>>>;
pub type AssetQueue = Rc<RefCell<Vec<AssetEvent>>>;

/// Browser image loader. Completion callbacks only enqueue events; the frame
/// loop drains them, so element lists are never touched from inside a callback.
#[derive(Default)]
pub struct WebImageLoader {
    images: ImageRegistry,
    events: AssetQueue,
}

impl WebImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> ImageRegistry {
        self.images.clone()
    }

    pub fn drain_events(&self) -> Vec<AssetEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn fail_now(&self, asset: AssetId, url: &str) {
        self.events.borrow_mut().push(AssetEvent::Failed(
            asset,
            AssetError::Load {
                url: url.to_string(),
            },
        ));
    }
}

impl ImageLoader for WebImageLoader {
    fn load(&mut self, asset: AssetId, url: &str) {
        let element = match web::HtmlImageElement::new() {
            Ok(el) => el,
            Err(e) => {
                log::error!("[asset] HtmlImageElement error: {:?}", e);
                self.fail_now(asset, url);
                return;
            }
        };

        let events_ok = self.events.clone();
        let onload = Closure::wrap(Box::new(move || {
            events_ok.borrow_mut().push(AssetEvent::Loaded(asset));
        }) as Box<dyn FnMut()>);

        let events_err = self.events.clone();
        let src = url.to_string();
        let onerror = Closure::wrap(Box::new(move || {
            events_err.borrow_mut().push(AssetEvent::Failed(
                asset,
                AssetError::Load { url: src.clone() },
            ));
        }) as Box<dyn FnMut()>);

        element.set_onload(Some(onload.as_ref().unchecked_ref()));
        element.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        element.set_src(url);

        self.images.borrow_mut().insert(
            asset,
            TrackedImage {
                element,
                _onload: onload,
                _onerror: onerror,
            },
        );
    }

    fn release(&mut self, asset: AssetId) {
        if let Some(tracked) = self.images.borrow_mut().remove(&asset) {
            tracked.element.set_onload(None);
            tracked.element.set_onerror(None);
        }
    }
}

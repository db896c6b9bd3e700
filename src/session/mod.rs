//! Recognition session: the adapter between an external OCR engine and
//! the geometry core.
//!
//! The engine itself (text detection, classification, image decoding) is
//! someone else's problem, reached through the [`RecognitionEngine`]
//! trait. What lives here is the state contract around it: a session
//! owns the current observation list, fully replaces it on every
//! `recognize` call, and exposes it through a poll accessor plus
//! explicit subscriber callbacks.

pub mod io_json;

use serde::{Deserialize, Serialize};

use crate::error::RecognitionError;
use crate::geom::{Normalized, Quad, Rect};

/// One recognized text region, in the crate's normalized convention
/// (lower-left origin, y up — engines reporting y-down coordinates flip
/// at construction, see [`Coord::flip_y`](crate::geom::Coord::flip_y)).
///
/// Every observation carries its bounding rectangle; the tighter
/// four-corner quadrilateral is present where the engine provides one.
/// The two capabilities are independent fields rather than a dynamic
/// dispatch surface, so callers can branch on exactly what they have.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Normalized axis-aligned bounding rectangle. Always present.
    pub bounds: Rect<Normalized>,

    /// Normalized corner quadrilateral, where the engine provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quad: Option<Quad<Normalized>>,

    /// Recognized text for the region, if the engine transcribes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Engine confidence in 0.0..=1.0, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Observation {
    /// Creates an observation with only the bounding-rectangle
    /// capability.
    pub fn new(bounds: Rect<Normalized>) -> Self {
        Self {
            bounds,
            quad: None,
            text: None,
            confidence: None,
        }
    }

    /// Adds the corner-quadrilateral capability.
    pub fn with_quad(mut self, quad: Quad<Normalized>) -> Self {
        self.quad = Some(quad);
        self
    }

    /// Adds the transcribed text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Adds the engine's confidence score.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// The corner quadrilateral, falling back to the bounding
    /// rectangle's corners when the engine supplied none. Quad-consuming
    /// shape builders go through this so every observation is drawable.
    pub fn quad_or_bounds(&self) -> Quad<Normalized> {
        self.quad.unwrap_or_else(|| Quad::from_rect(&self.bounds))
    }
}

/// An external recognition engine.
///
/// The call is synchronous from the caller's perspective: it returns
/// once the engine has produced all observations for the image, in the
/// engine's own order. Implementations decode the image bytes
/// themselves and report anything they cannot handle as a
/// [`RecognitionError`].
pub trait RecognitionEngine {
    fn recognize(&self, image: &[u8]) -> Result<Vec<Observation>, RecognitionError>;
}

impl<'a, E: RecognitionEngine + ?Sized> RecognitionEngine for &'a E {
    fn recognize(&self, image: &[u8]) -> Result<Vec<Observation>, RecognitionError> {
        (**self).recognize(image)
    }
}

impl<E: RecognitionEngine + ?Sized> RecognitionEngine for Box<E> {
    fn recognize(&self, image: &[u8]) -> Result<Vec<Observation>, RecognitionError> {
        (**self).recognize(image)
    }
}

type Subscriber = Box<dyn FnMut(&[Observation])>;

/// Owns the current observation list for one recognition stream.
///
/// The list starts empty, is cleared and repopulated within a single
/// `recognize` call, and persists until the next call or the session is
/// dropped. Readers never see partial updates: `recognize` takes
/// `&mut self`, so the borrow checker enforces the one-in-flight-call
/// assumption instead of an internal lock.
pub struct RecognitionSession<E> {
    engine: E,
    observations: Vec<Observation>,
    subscribers: Vec<Subscriber>,
}

impl<E: RecognitionEngine> RecognitionSession<E> {
    /// Creates a session around an engine, with an empty observation
    /// list.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            observations: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Runs recognition on the given image bytes.
    ///
    /// Any previously held observations are discarded first. On success
    /// the list holds the engine's results in the engine's order and a
    /// borrow of it is returned. On failure the list is left empty — no
    /// partial results are ever retained — and the engine's error
    /// propagates unchanged. Subscribers are notified with the post-call
    /// snapshot either way, since the held state changed in both cases.
    pub fn recognize(&mut self, image: &[u8]) -> Result<&[Observation], RecognitionError> {
        self.observations.clear();
        match self.engine.recognize(image) {
            Ok(observations) => {
                self.observations = observations;
                self.notify();
                Ok(&self.observations)
            }
            Err(err) => {
                self.notify();
                Err(err)
            }
        }
    }

    /// A snapshot read of the current observation list.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Registers a callback invoked with the new observation slice after
    /// every completed `recognize` call, successful or not.
    ///
    /// This replaces implicit change tracking: state updates are pushed
    /// at exactly the two points the list is replaced. Subscribers
    /// cannot be removed; drop the session to drop them.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&[Observation]) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            subscriber(&self.observations);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Coord;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Engine returning a fixed script of results, one per call.
    struct ScriptedEngine {
        script: RefCell<Vec<Result<Vec<Observation>, RecognitionError>>>,
    }

    impl ScriptedEngine {
        fn new(script: Vec<Result<Vec<Observation>, RecognitionError>>) -> Self {
            Self {
                script: RefCell::new(script),
            }
        }
    }

    impl RecognitionEngine for ScriptedEngine {
        fn recognize(&self, _image: &[u8]) -> Result<Vec<Observation>, RecognitionError> {
            self.script.borrow_mut().remove(0)
        }
    }

    fn observation(x: f64) -> Observation {
        Observation::new(Rect::from_xywh(x, 0.2, 0.1, 0.1))
    }

    #[test]
    fn test_success_replaces_previous_results() {
        let engine = ScriptedEngine::new(vec![
            Ok(vec![observation(0.1), observation(0.3)]),
            Ok(vec![observation(0.7)]),
        ]);
        let mut session = RecognitionSession::new(engine);

        session.recognize(b"first").unwrap();
        assert_eq!(session.observations().len(), 2);

        // The second call replaces, never appends.
        session.recognize(b"second").unwrap();
        assert_eq!(session.observations().len(), 1);
        assert_eq!(session.observations()[0].bounds.origin, Coord::new(0.7, 0.2));
    }

    #[test]
    fn test_failure_leaves_list_empty_and_propagates() {
        let engine = ScriptedEngine::new(vec![
            Ok(vec![observation(0.1)]),
            Err(RecognitionError::UnsupportedImage("not an image".into())),
            Ok(vec![observation(0.5)]),
        ]);
        let mut session = RecognitionSession::new(engine);

        session.recognize(b"ok").unwrap();
        assert_eq!(session.observations().len(), 1);

        let err = session.recognize(b"garbage").unwrap_err();
        assert!(matches!(err, RecognitionError::UnsupportedImage(_)));
        assert!(session.observations().is_empty());

        // A subsequent success fully repopulates.
        session.recognize(b"ok again").unwrap();
        assert_eq!(session.observations().len(), 1);
        assert_eq!(session.observations()[0].bounds.origin, Coord::new(0.5, 0.2));
    }

    #[test]
    fn test_subscribers_see_every_replacement() {
        let engine = ScriptedEngine::new(vec![
            Ok(vec![observation(0.1), observation(0.2)]),
            Err(RecognitionError::Engine("fault".into())),
        ]);
        let mut session = RecognitionSession::new(engine);

        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |observations| sink.borrow_mut().push(observations.len()));

        session.recognize(b"ok").unwrap();
        let _ = session.recognize(b"bad");

        // One notification per call: the replacement, then the clear.
        assert_eq!(*seen.borrow(), vec![2, 0]);
    }

    #[test]
    fn test_quad_or_bounds_falls_back() {
        let bounds = Rect::from_xywh(0.2, 0.1, 0.4, 0.2);
        let plain = Observation::new(bounds);
        let fallback = plain.quad_or_bounds();
        assert_eq!(fallback, Quad::from_rect(&bounds));

        let quad = Quad::new(
            Coord::new(0.21, 0.31),
            Coord::new(0.59, 0.29),
            Coord::new(0.22, 0.11),
            Coord::new(0.58, 0.12),
        );
        let with_quad = Observation::new(bounds).with_quad(quad);
        assert_eq!(with_quad.quad_or_bounds(), quad);
    }

    #[test]
    fn test_boxed_engine_is_usable() {
        let engine: Box<dyn RecognitionEngine> =
            Box::new(ScriptedEngine::new(vec![Ok(vec![observation(0.4)])]));
        let mut session = RecognitionSession::new(engine);
        assert_eq!(session.recognize(b"img").unwrap().len(), 1);
    }
}

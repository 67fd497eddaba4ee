// SPDX-License-Identifier: GPL-3.0-only

//! Filter editor state
//!
//! Owns the current filter choice, intensity, picked source image, and the
//! derived rendered image. Every state change re-renders synchronously, so
//! the rendered image always reflects the latest (source, choice,
//! intensity) triple — there is no stale state to invalidate. Rendering
//! with no source image is a no-op, as is exporting with no rendered image.
//!
//! Generic over [`FilterEngine`] so tests can observe engine invocations.

use crate::constants::mapping::DEFAULT_INTENSITY;
use crate::filters::{FilterChoice, FilterEngine, FilterParams};
use image::RgbaImage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct FilterEditor<E: FilterEngine> {
    engine: E,
    source: Option<Arc<RgbaImage>>,
    choice: FilterChoice,
    intensity: f32,
    rendered: Option<Arc<RgbaImage>>,
}

impl<E: FilterEngine> FilterEditor<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            source: None,
            choice: FilterChoice::default(),
            intensity: DEFAULT_INTENSITY,
            rendered: None,
        }
    }

    /// Replace the source image and re-render.
    pub fn select_image(&mut self, image: Arc<RgbaImage>) {
        self.source = Some(image);
        self.render();
    }

    /// Switch to a different filter and re-render with the current intensity.
    pub fn select_filter(&mut self, choice: FilterChoice) {
        self.choice = choice;
        self.render();
    }

    /// Update the intensity (clamped to [0, 1]) and re-render.
    pub fn set_intensity(&mut self, value: f32) {
        self.intensity = value.clamp(0.0, 1.0);
        self.render();
    }

    pub fn choice(&self) -> FilterChoice {
        self.choice
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// The latest render, if any. This is the export candidate.
    pub fn rendered(&self) -> Option<&Arc<RgbaImage>> {
        self.rendered.as_ref()
    }

    /// The parameter set a render would use right now.
    pub fn params(&self) -> FilterParams {
        FilterParams::for_choice(self.choice, self.intensity)
    }

    /// Run the engine over the current source.
    ///
    /// No-op without a source image. On engine failure the previous render
    /// is retained so a transient failure never blanks the preview.
    fn render(&mut self) {
        let Some(source) = &self.source else {
            return;
        };

        let params = self.params();
        match self.engine.apply(source, self.choice, params) {
            Ok(output) => {
                debug!(choice = ?self.choice, intensity = self.intensity, "Rendered");
                self.rendered = Some(Arc::new(output));
            }
            Err(err) => {
                warn!(choice = ?self.choice, error = %err, "Filter engine produced no output");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FilterError;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every engine invocation; optionally fails.
    struct MockEngine {
        calls: Rc<RefCell<Vec<(FilterChoice, FilterParams)>>>,
        fail: bool,
    }

    impl FilterEngine for MockEngine {
        fn apply(
            &self,
            source: &RgbaImage,
            choice: FilterChoice,
            params: FilterParams,
        ) -> Result<RgbaImage, FilterError> {
            self.calls.borrow_mut().push((choice, params));
            if self.fail {
                Err(FilterError::EmptyImage)
            } else {
                Ok(source.clone())
            }
        }
    }

    fn editor_with_mock(fail: bool) -> (FilterEditor<MockEngine>, Rc<RefCell<Vec<(FilterChoice, FilterParams)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let engine = MockEngine {
            calls: Rc::clone(&calls),
            fail,
        };
        (FilterEditor::new(engine), calls)
    }

    fn test_source() -> Arc<RgbaImage> {
        Arc::new(RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 255])))
    }

    #[test]
    fn no_source_means_no_engine_invocation() {
        let (mut editor, calls) = editor_with_mock(false);

        editor.set_intensity(0.7);
        editor.select_filter(FilterChoice::GaussianBlur);

        assert!(calls.borrow().is_empty());
        assert!(editor.rendered().is_none());
    }

    #[test]
    fn selecting_image_renders_with_default_filter() {
        let (mut editor, calls) = editor_with_mock(false);

        editor.select_image(test_source());

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, FilterChoice::SepiaTone);
        assert_eq!(calls[0].1.intensity, Some(0.5));
        assert!(editor.rendered().is_some());
    }

    #[test]
    fn switching_filter_renders_exactly_once_with_new_choice() {
        let (mut editor, calls) = editor_with_mock(false);
        editor.select_image(test_source());
        calls.borrow_mut().clear();

        editor.select_filter(FilterChoice::GaussianBlur);

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, FilterChoice::GaussianBlur);
        // Intensity 0.5 maps to radius 100 for blur
        assert_eq!(calls[0].1.radius, Some(100.0));
    }

    #[test]
    fn pixellate_at_full_intensity_maps_to_scale_ten() {
        let (mut editor, calls) = editor_with_mock(false);
        editor.select_image(test_source());
        editor.set_intensity(1.0);
        calls.borrow_mut().clear();

        editor.select_filter(FilterChoice::Pixellate);

        assert_eq!(calls.borrow()[0].1.scale, Some(10.0));
    }

    #[test]
    fn intensity_is_clamped() {
        let (mut editor, _) = editor_with_mock(false);

        editor.set_intensity(3.5);
        assert_eq!(editor.intensity(), 1.0);

        editor.set_intensity(-0.5);
        assert_eq!(editor.intensity(), 0.0);
    }

    #[test]
    fn failed_render_retains_previous_output() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let engine = MockEngine {
            calls: Rc::clone(&calls),
            fail: false,
        };
        let mut editor = FilterEditor::new(engine);
        editor.select_image(test_source());
        let before = Arc::clone(editor.rendered().unwrap());

        // Swap in a failing engine by replaying state onto a new editor
        let failing = MockEngine { calls, fail: true };
        let mut failing_editor = FilterEditor::new(failing);
        failing_editor.source = editor.source.clone();
        failing_editor.rendered = Some(Arc::clone(&before));

        failing_editor.select_filter(FilterChoice::Edges);

        assert!(Arc::ptr_eq(failing_editor.rendered().unwrap(), &before));
    }
}

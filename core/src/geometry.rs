/// Layout numbers of a single slide, in CSS pixels relative to the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideMetrics {
    pub left: f64,
    pub width: f64,
}

impl SlideMetrics {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

/// Translation that horizontally centers `slide` inside a viewport of
/// `viewport_width`.
pub fn centering_offset(slide: SlideMetrics, viewport_width: f64) -> f64 {
    let margin = (viewport_width - slide.width) / 2.0;
    -(slide.left - margin)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slide<E> {
    pub offset: f64,
    pub element: E,
}

/// Ordered slides of one strip, indexed `0..len` without gaps.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideSet<E> {
    slides: Vec<Slide<E>>,
}

impl<E> SlideSet<E> {
    pub fn build<I>(children: I, viewport_width: f64) -> Self
    where
        I: IntoIterator<Item = (SlideMetrics, E)>,
    {
        let slides = children
            .into_iter()
            .map(|(metrics, element)| Slide {
                offset: centering_offset(metrics, viewport_width),
                element,
            })
            .collect();
        Self { slides }
    }

    pub fn from_offsets<I>(slides: I) -> Self
    where
        I: IntoIterator<Item = (f64, E)>,
    {
        Self {
            slides: slides
                .into_iter()
                .map(|(offset, element)| Slide { offset, element })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn offset(&self, index: usize) -> Option<f64> {
        self.slides.get(index).map(|slide| slide.offset)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide<E>> {
        self.slides.iter()
    }
}

/// Neighbourhood of the active slide. `previous` is absent on the first
/// slide and `next` on the last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexTriple {
    pub previous: Option<usize>,
    pub active: usize,
    pub next: Option<usize>,
}

impl IndexTriple {
    pub fn derive(active: usize, len: usize) -> Self {
        let last = len.saturating_sub(1);
        Self {
            previous: active.checked_sub(1),
            active,
            next: if active >= last { None } else { Some(active + 1) },
        }
    }
}

use derive_more::Display;

use crate::classify::AnalysisResult;

/// Token tying a deferred analysis completion to the trigger that started it.
/// A completion whose token no longer matches the machine is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "request #{}", _0)]
pub struct RequestId(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Stage<I> {
    /// No image uploaded.
    Empty,
    /// An image is present, optionally with the result of its analysis.
    Ready {
        image: I,
        result: Option<AnalysisResult>,
    },
    /// An analysis is in flight for the held image.
    Analyzing { image: I, request: RequestId },
}

/// The upload -> analyze -> result workflow as a single state value.
///
/// `Analyzing` always holds an image and a request token, and a result can
/// only exist alongside the image that produced it, so the broken
/// combinations (analysis with nothing uploaded, orphaned result) cannot be
/// constructed. Generic over the image representation: the web UI stores a
/// data-URL encoding, tests use plain strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Workflow<I> {
    stage: Stage<I>,
    next_request: u64,
}

impl<I> Default for Workflow<I> {
    fn default() -> Self {
        Self {
            stage: Stage::Empty,
            next_request: 0,
        }
    }
}

impl<I> Workflow<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> &Stage<I> {
        &self.stage
    }

    pub fn image(&self) -> Option<&I> {
        match &self.stage {
            Stage::Empty => None,
            Stage::Ready { image, .. } | Stage::Analyzing { image, .. } => Some(image),
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.stage {
            Stage::Ready { result, .. } => result.as_ref(),
            _ => None,
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.stage, Stage::Analyzing { .. })
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        match &self.stage {
            Stage::Analyzing { request, .. } => Some(*request),
            _ => None,
        }
    }

    /// Install a new image, dropping any previous image and result. A request
    /// token still in flight is abandoned here; its completion can no longer
    /// match.
    pub fn accept_image(&mut self, image: I) {
        self.stage = Stage::Ready {
            image,
            result: None,
        };
    }

    /// Drop the image and anything derived from it.
    pub fn remove_image(&mut self) {
        self.stage = Stage::Empty;
    }

    /// Move to `Analyzing` and hand back the token the deferred completion
    /// must present. `None` when there is no image to analyze or one is
    /// already in flight (single-flight).
    pub fn begin_analysis(&mut self) -> Option<RequestId> {
        match std::mem::replace(&mut self.stage, Stage::Empty) {
            Stage::Ready { image, .. } => {
                let request = RequestId(self.next_request);
                self.next_request += 1;
                self.stage = Stage::Analyzing { image, request };
                Some(request)
            }
            other => {
                self.stage = other;
                None
            }
        }
    }

    /// Apply a completed analysis. Returns `false` and leaves the machine
    /// untouched when the token is stale, i.e. the image was replaced or
    /// removed after the trigger.
    pub fn complete_analysis(&mut self, request: RequestId, result: AnalysisResult) -> bool {
        match std::mem::replace(&mut self.stage, Stage::Empty) {
            Stage::Analyzing {
                image,
                request: current,
            } if current == request => {
                self.stage = Stage::Ready {
                    image,
                    result: Some(result),
                };
                true
            }
            other => {
                self.stage = other;
                false
            }
        }
    }

    /// Logout cascade: back to the initial stage. The token counter keeps
    /// counting, so a completion from before the reset can never match a
    /// request issued after it.
    pub fn reset(&mut self) {
        self.stage = Stage::Empty;
    }
}

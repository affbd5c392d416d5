//! Scripted demo timelines.
//!
//! A demo is a finite list of frames, each holding the delay since the
//! previous frame and the state to show from then on. A single scheduler
//! walks the list; nothing reacts to user input.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Frame<T> {
    /// Delay after the previous frame (or the start, for the first one)
    pub delay: Duration,
    pub state: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<T> {
    frames: Vec<Frame<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self { frames: Vec::new() }
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame shown `delay` after the previous one.
    pub fn then(mut self, delay: Duration, state: T) -> Self {
        self.frames.push(Frame { delay, state });
        self
    }

    /// Reveal `text` one character at a time, `per_char` apart.
    pub fn type_out<F>(mut self, text: &str, per_char: Duration, make_state: F) -> Self
    where
        F: Fn(String) -> T,
    {
        for (index, ch) in text.char_indices() {
            let typed = text[..index + ch.len_utf8()].to_string();
            self.frames.push(Frame {
                delay: per_char,
                state: make_state(typed),
            });
        }
        self
    }

    pub fn frames(&self) -> &[Frame<T>] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Time from the start until the last frame is shown.
    pub fn total_duration(&self) -> Duration {
        self.frames.iter().map(|frame| frame.delay).sum()
    }

    /// Offset of every frame from the start.
    pub fn offsets(&self) -> Vec<Duration> {
        self.frames
            .iter()
            .scan(Duration::ZERO, |at, frame| {
                *at += frame.delay;
                Some(*at)
            })
            .collect()
    }

    /// State visible `elapsed` after the start; `None` before the first frame.
    pub fn state_at(&self, elapsed: Duration) -> Option<&T> {
        let mut at = Duration::ZERO;
        let mut current = None;
        for frame in &self.frames {
            at += frame.delay;
            if at > elapsed {
                break;
            }
            current = Some(&frame.state);
        }
        current
    }

    pub fn last(&self) -> Option<&T> {
        self.frames.last().map(|frame| &frame.state)
    }

    pub fn cursor(&self) -> TimelineCursor<'_, T> {
        TimelineCursor {
            timeline: self,
            next: 0,
            until_next: self.frames.first().map(|frame| frame.delay),
        }
    }
}

/// Walks a timeline as time passes.
#[derive(Debug, Clone)]
pub struct TimelineCursor<'a, T> {
    timeline: &'a Timeline<T>,
    next: usize,
    until_next: Option<Duration>,
}

impl<'a, T> TimelineCursor<'a, T> {
    /// Time remaining until the next frame, `None` once finished.
    pub fn next_delay(&self) -> Option<Duration> {
        self.until_next
    }

    /// Index of the next frame to be shown.
    pub fn position(&self) -> usize {
        self.next
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.timeline.frames.len()
    }

    /// Let `by` pass and return every state shown meanwhile, in order.
    pub fn advance(&mut self, by: Duration) -> Vec<&'a T> {
        let frames = &self.timeline.frames;
        let mut shown = Vec::new();
        let mut remaining = by;

        while let Some(wait) = self.until_next {
            if remaining < wait {
                self.until_next = Some(wait - remaining);
                break;
            }
            remaining -= wait;
            shown.push(&frames[self.next].state);
            self.next += 1;
            self.until_next = frames.get(self.next).map(|frame| frame.delay);
        }
        shown
    }
}

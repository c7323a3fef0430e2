//! Test doubles for the loop's collaborators.
#![allow(dead_code)]

use std::collections::VecDeque;

use super_jumper::assets::{Sound, SpriteFrame};
use super_jumper::audio::AudioSink;
use super_jumper::clock::FrameClock;
use super_jumper::display::{Canvas, Rect, Rgb, TextSize};
use super_jumper::input::{InputEvent, InputSource};

/// Records what the last frame drew.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub presents: usize,
    pub clears: usize,
    /// Texts drawn since the last clear.
    pub texts: Vec<String>,
    pub rects: Vec<(Rect, Rgb)>,
    pub circles: Vec<(i32, i32, i32)>,
    pub blits: Vec<Rect>,
    pub resized: Option<(u16, u16)>,
}

impl RecordingCanvas {
    pub fn drew_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|t| t.contains(needle))
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, _color: Rgb) {
        self.clears += 1;
        self.texts.clear();
        self.rects.clear();
        self.circles.clear();
        self.blits.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.rects.push((rect, color));
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, _color: Rgb) {
        self.circles.push((cx, cy, radius));
    }

    fn blit(&mut self, rect: Rect, _frame: &SpriteFrame, _color: Rgb) {
        self.blits.push(rect);
    }

    fn text(&mut self, _x: i32, _y: i32, text: &str, _size: TextSize, _color: Rgb) {
        self.texts.push(text.to_string());
    }

    fn present(&mut self) -> std::io::Result<()> {
        self.presents += 1;
        Ok(())
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.resized = Some((cols, rows));
    }
}

/// Plays back one batch of events per frame, then asks to quit forever.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    /// `n` frames without any input.
    pub fn idle(n: usize) -> Self {
        Self::new(vec![Vec::new(); n])
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> std::io::Result<Vec<InputEvent>> {
        Ok(self
            .frames
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit]))
    }
}

#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub played: Vec<Sound>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, sound: Sound) {
        self.played.push(sound);
    }
}

#[derive(Debug, Default)]
pub struct CountingClock {
    pub ticks: u64,
}

impl FrameClock for CountingClock {
    fn tick(&mut self) {
        self.ticks += 1;
    }
}

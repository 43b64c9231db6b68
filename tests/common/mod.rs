// Recording DrawSurface so rendering can be checked without a browser.

#![allow(dead_code)]
use savoir_core::{DrawSurface, LinearGradient, Rect};

#[derive(Clone, Debug, PartialEq)]
pub enum Cmd {
    Clear(f32, f32),
    Blur(f32),
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
    Fill(Rect, LinearGradient),
}

#[derive(Default)]
pub struct Recorder {
    pub cmds: Vec<Cmd>,
}

impl Recorder {
    pub fn fills(&self) -> Vec<(&Rect, &LinearGradient)> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::Fill(r, g) => Some((r, g)),
                _ => None,
            })
            .collect()
    }

    pub fn translations(&self) -> Vec<(f32, f32)> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::Translate(x, y) => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.cmds.push(Cmd::Clear(width, height));
    }
    fn set_blur(&mut self, radius_px: f32) {
        self.cmds.push(Cmd::Blur(radius_px));
    }
    fn save(&mut self) {
        self.cmds.push(Cmd::Save);
    }
    fn restore(&mut self) {
        self.cmds.push(Cmd::Restore);
    }
    fn translate(&mut self, x: f32, y: f32) {
        self.cmds.push(Cmd::Translate(x, y));
    }
    fn rotate(&mut self, radians: f32) {
        self.cmds.push(Cmd::Rotate(radians));
    }
    fn fill_rect(&mut self, rect: Rect, gradient: &LinearGradient) {
        self.cmds.push(Cmd::Fill(rect, gradient.clone()));
    }
}

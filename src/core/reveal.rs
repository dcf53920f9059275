use super::constants::{INTRO_START, MESSAGE_FADE_GAP, MESSAGE_HOLD, STRAP_FALLBACK};
use super::surface::{Surface, Viewport};
use super::trail::CursorTrail;
use super::typewriter::{TypeStep, Typewriter};
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

/// Page-level reveal actions. The web shell maps these onto DOM class toggles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cue {
    ShowWriting,
    StartTrail,
    ShowStrap,
    HideStrap,
    ShowMessage(usize),
    HideMessage(usize),
    ShowSheet,
    StartTyping,
    Type(TypeStep),
}

/// Cues scheduled at fixed offsets from the moment the timeline starts.
#[derive(Clone, Debug)]
pub struct Timeline {
    cues: Vec<(Duration, Cue)>,
    elapsed: Duration,
    next: usize,
}

impl Timeline {
    pub fn new(mut cues: Vec<(Duration, Cue)>) -> Self {
        cues.sort_by_key(|(at, _)| *at);
        Self {
            cues,
            elapsed: Duration::ZERO,
            next: 0,
        }
    }

    pub fn intro() -> Self {
        Self::new(vec![
            (INTRO_START, Cue::ShowWriting),
            (INTRO_START, Cue::StartTrail),
            (STRAP_FALLBACK, Cue::ShowStrap),
        ])
    }

    pub fn letter() -> Self {
        let second = MESSAGE_HOLD + MESSAGE_FADE_GAP;
        let sheet = MESSAGE_HOLD * 2 + MESSAGE_FADE_GAP;
        Self::new(vec![
            (Duration::ZERO, Cue::HideStrap),
            (Duration::ZERO, Cue::ShowMessage(0)),
            (MESSAGE_HOLD, Cue::HideMessage(0)),
            (second, Cue::ShowMessage(1)),
            (MESSAGE_HOLD * 2, Cue::HideMessage(1)),
            (sheet, Cue::ShowSheet),
            (sheet, Cue::StartTyping),
        ])
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.cues.len()
    }

    pub fn advance(&mut self, dt: Duration, out: &mut Vec<Cue>) {
        self.elapsed += dt;
        while let Some((at, cue)) = self.cues.get(self.next) {
            if *at > self.elapsed {
                break;
            }
            out.push(cue.clone());
            self.next += 1;
        }
    }
}

/// The scripted greeting: intro reveal, guide trail, and the letter that is
/// opened from the strap and typed out.
pub struct GreetingSequence {
    intro: Timeline,
    letter: Option<Timeline>,
    trail: CursorTrail,
    typewriter: Typewriter,
    typing: bool,
    strap_shown: bool,
}

impl GreetingSequence {
    pub fn new<I, S>(viewport: Viewport, letter_lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            intro: Timeline::intro(),
            letter: None,
            trail: CursorTrail::new(viewport),
            typewriter: Typewriter::new(letter_lines),
            typing: false,
            strap_shown: false,
        }
    }

    pub fn trail(&self) -> &CursorTrail {
        &self.trail
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Start the letter sequence. Only the first call has any effect.
    pub fn open_letter(&mut self) -> bool {
        if self.letter.is_some() {
            return false;
        }
        self.letter = Some(Timeline::letter());
        true
    }

    pub fn advance<R: Rng>(
        &mut self,
        dt: Duration,
        cursor: Vec2,
        viewport: Viewport,
        rng: &mut R,
        out: &mut Vec<Cue>,
    ) {
        let mut scheduled = Vec::new();
        self.intro.advance(dt, &mut scheduled);
        if let Some(letter) = &mut self.letter {
            letter.advance(dt, &mut scheduled);
        }

        let mut typing_started = false;
        for cue in scheduled {
            match cue {
                Cue::StartTrail => self.trail.start(),
                Cue::StartTyping => {
                    self.typing = true;
                    typing_started = true;
                }
                Cue::ShowStrap => {
                    self.push_strap(out);
                    continue;
                }
                _ => {}
            }
            out.push(cue);
        }

        if self.trail.advance(dt, cursor, viewport, rng) {
            log::info!("[trail] guide dot arrived");
            self.push_strap(out);
        }

        if self.typing && !self.typewriter.is_done() {
            let mut steps = Vec::new();
            let step_dt = if typing_started { Duration::ZERO } else { dt };
            self.typewriter.advance(step_dt, &mut steps);
            out.extend(steps.into_iter().map(Cue::Type));
        }
    }

    fn push_strap(&mut self, out: &mut Vec<Cue>) {
        if !self.strap_shown {
            self.strap_shown = true;
            out.push(Cue::ShowStrap);
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.trail.draw(surface);
    }
}

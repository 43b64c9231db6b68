use crate::constants::*;
use crate::dom::{self, Listener};
use savoir_core::{Feedback, Phase, QuizSession, QUESTIONS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Elements {
    question: web::Element,
    progress: web::Element,
    input: web::HtmlInputElement,
    submit: web::HtmlButtonElement,
    feedback: web::Element,
    result: web::Element,
    restart: web::Element,
}

impl Elements {
    fn find(document: &web::Document) -> Option<Self> {
        Some(Self {
            question: dom::element_by_id(document, QUIZ_QUESTION_ID)?,
            progress: dom::element_by_id(document, QUIZ_PROGRESS_ID)?,
            input: dom::element_by_id(document, QUIZ_INPUT_ID)?,
            submit: dom::element_by_id(document, QUIZ_SUBMIT_ID)?,
            feedback: dom::element_by_id(document, QUIZ_FEEDBACK_ID)?,
            result: dom::element_by_id(document, QUIZ_RESULT_ID)?,
            restart: dom::element_by_id(document, QUIZ_RESTART_ID)?,
        })
    }
}

type Session = Rc<RefCell<QuizSession<'static>>>;

/// Quiz page bindings; listeners are removed when this is dropped.
pub struct QuizView {
    _listeners: Vec<Listener>,
}

pub fn mount(document: &web::Document) -> anyhow::Result<Option<QuizView>> {
    let Some(els) = Elements::find(document) else {
        return Ok(None);
    };
    let els = Rc::new(els);
    let session: Session = Rc::new(RefCell::new(QuizSession::new(QUESTIONS)));
    render(&els, &session.borrow());
    log::info!("[quiz] mounted with {} questions", QUESTIONS.len());

    let mut listeners = Vec::with_capacity(4);
    {
        let (els, session) = (els.clone(), session.clone());
        let target = els.submit.clone();
        listeners.push(Listener::new(&target, "click", move |_| {
            on_submit(&els, &session);
        })?);
    }
    {
        let (els, session) = (els.clone(), session.clone());
        let target = els.input.clone();
        listeners.push(Listener::new(&target, "keydown", move |ev| {
            let enter = ev
                .dyn_ref::<web::KeyboardEvent>()
                .map(|k| k.key() == "Enter")
                .unwrap_or(false);
            if enter {
                ev.prevent_default();
                on_submit(&els, &session);
            }
        })?);
    }
    {
        let (els, session) = (els.clone(), session.clone());
        let target = els.input.clone();
        listeners.push(Listener::new(&target, "input", move |_| {
            render(&els, &session.borrow());
        })?);
    }
    {
        let (els, session) = (els.clone(), session.clone());
        let target = els.restart.clone();
        listeners.push(Listener::new(&target, "click", move |_| {
            session.borrow_mut().restart();
            els.input.set_value("");
            render(&els, &session.borrow());
        })?);
    }

    Ok(Some(QuizView {
        _listeners: listeners,
    }))
}

fn on_submit(els: &Rc<Elements>, session: &Session) {
    let result = session.borrow_mut().submit(&els.input.value());
    match result {
        Ok(_) => {
            render(els, &session.borrow());
            let (els, session) = (els.clone(), session.clone());
            dom::set_timeout(QUIZ_FEEDBACK_DELAY_MS, move || {
                els.input.set_value("");
                session.borrow_mut().advance();
                render(&els, &session.borrow());
            });
        }
        Err(e) => log::debug!("[quiz] submit ignored: {}", e),
    }
}

fn render(els: &Elements, session: &QuizSession<'_>) {
    let finished = session.is_finished();
    dom::set_visible(&els.question, !finished);
    dom::set_visible(&els.progress, !finished);
    dom::set_visible(&els.input, !finished);
    dom::set_visible(&els.submit, !finished);
    dom::set_visible(&els.result, finished);
    dom::set_visible(&els.restart, finished);

    if finished {
        dom::set_visible(&els.feedback, false);
        let (_, total) = session.progress();
        els.result.set_text_content(Some(&format!(
            "Vous avez obtenu {} / {}",
            session.score(),
            total
        )));
        return;
    }

    if let Some(q) = session.current() {
        els.question.set_text_content(Some(q.question));
    }
    let (number, total) = session.progress();
    els.progress
        .set_text_content(Some(&format!("Question {} / {}", number, total)));

    let reviewing = matches!(session.phase(), Phase::Reviewing(_));
    els.input.set_disabled(reviewing);
    els.submit
        .set_disabled(reviewing || els.input.value().trim().is_empty());

    let cl = els.feedback.class_list();
    _ = cl.remove_2(QUIZ_CORRECT_CLASS, QUIZ_INCORRECT_CLASS);
    match session.phase() {
        Phase::Reviewing(Feedback::Correct) => {
            _ = cl.add_1(QUIZ_CORRECT_CLASS);
            els.feedback.set_text_content(Some(QUIZ_CORRECT_TEXT));
            dom::set_visible(&els.feedback, true);
        }
        Phase::Reviewing(Feedback::Incorrect { expected }) => {
            _ = cl.add_1(QUIZ_INCORRECT_CLASS);
            els.feedback
                .set_text_content(Some(&format!("{}{}", QUIZ_INCORRECT_PREFIX, expected)));
            dom::set_visible(&els.feedback, true);
        }
        _ => {
            els.feedback.set_text_content(None);
            dom::set_visible(&els.feedback, false);
        }
    }
}

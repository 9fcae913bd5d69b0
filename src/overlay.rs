use crate::typeset;

/// One evaluated expression as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub expression: String,
    pub answer: String,
}

/// Markup handed to the typesetting engine for one result.
pub fn latex_markup(expression: &str, answer: &str) -> String {
    format!("\\(\\LARGE{{{expression} = {answer}}}\\)")
}

/// Accepts evaluation results in arrival order, keeps the append-only
/// result history and typeset queue, and batches typeset passes: accepts
/// arriving in the same tick coalesce into a single pass over the full
/// queue.
#[derive(Default)]
pub struct OverlayRenderer {
    results: Vec<ResultEntry>,
    typeset_queue: Vec<String>,
    pass_pending: bool,
    rendered: usize,
}

impl OverlayRenderer {
    pub fn accept(&mut self, entry: ResultEntry) {
        self.typeset_queue
            .push(latex_markup(&entry.expression, &entry.answer));
        self.results.push(entry);
        self.pass_pending = true;
    }

    /// Idle-tick callback: run the pending typeset pass, if any, over the
    /// whole queue. Returns whether a pass was executed by the engine.
    pub fn tick(&mut self) -> bool {
        if !self.pass_pending {
            return false;
        }
        self.pass_pending = false;
        let ran = typeset::with_engine(|engine| engine.typeset(&self.typeset_queue));
        if ran {
            self.rendered = self.typeset_queue.len();
            tracing::debug!(entries = self.rendered, "typeset pass completed");
        }
        ran
    }

    pub fn results(&self) -> &[ResultEntry] {
        &self.results
    }

    pub fn typeset_queue(&self) -> &[String] {
        &self.typeset_queue
    }

    pub fn pass_pending(&self) -> bool {
        self.pass_pending
    }

    /// Number of queue entries covered by completed typeset passes. Never
    /// exceeds the result history length.
    pub fn rendered_len(&self) -> usize {
        self.rendered
    }

    /// Full reset: result history, typeset queue and any pending pass.
    /// Does not touch the drawing surface.
    pub fn reset(&mut self) {
        self.results.clear();
        self.typeset_queue.clear();
        self.pass_pending = false;
        self.rendered = 0;
    }

    /// Explicit clear of the result history only.
    pub fn clear_history(&mut self) {
        self.results.clear();
    }
}

//! Presentation sync: turning change notices into minimal redraw plans.
//!
//! `PresentationSync` mirrors what the host last drew and diffs incoming
//! notices against that mirror, so hosts repaint only the widgets whose
//! content actually changed. It is pure bookkeeping: no rendering, no
//! persistence, no knowledge of the store.

use std::collections::HashMap;

use tasbih_core::{ChangeNotice, CounterKey};

/// One per-key badge that needs repainting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeUpdate {
    /// The counter the badge belongs to.
    pub key: CounterKey,
    /// The value to draw.
    pub value: u64,
    /// Whether the badge should render in its emphasized, nonzero style.
    pub has_count: bool,
}

/// The primary display needs repainting with the selected counter's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUpdate {
    /// The selected counter.
    pub key: CounterKey,
    /// The value to draw.
    pub value: u64,
}

/// Everything the host must redraw after a change notice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RedrawPlan {
    /// Badges whose displayed value is stale.
    pub badges: Vec<BadgeUpdate>,
    /// The primary display, when the selected counter was affected.
    pub display: Option<DisplayUpdate>,
}

impl RedrawPlan {
    /// True when nothing needs repainting.
    pub fn is_empty(&self) -> bool {
        self.badges.is_empty() && self.display.is_none()
    }
}

/// Diffs change notices against the last-drawn state.
///
/// Feed every notice through [`plan`](Self::plan) in order; the returned
/// plan lists exactly the widgets whose content differs from what was
/// planned before. Call [`invalidate`](Self::invalidate) when the host
/// loses its surface and everything must be drawn again.
#[derive(Debug, Default)]
pub struct PresentationSync {
    /// Last planned badge value per key.
    badges: HashMap<CounterKey, u64>,
    /// Last planned primary display content.
    display: Option<(CounterKey, u64)>,
}

impl PresentationSync {
    /// A sync with no drawn state; the first plan repaints everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the minimal redraw plan for a notice.
    ///
    /// A badge update is emitted per noticed key whose value differs from
    /// the mirror. The primary display is updated only when the notice
    /// carries a selection and that key is among the noticed counts; an
    /// unselected counter changing never touches the display.
    pub fn plan(&mut self, notice: &ChangeNotice) -> RedrawPlan {
        let mut plan = RedrawPlan::default();

        for (key, value) in &notice.counts {
            if self.badges.get(key) == Some(value) {
                continue;
            }
            self.badges.insert(key.clone(), *value);
            plan.badges.push(BadgeUpdate {
                key: key.clone(),
                value: *value,
                has_count: *value > 0,
            });
        }

        if let Some(selected) = &notice.selection {
            if let Some(value) = notice.value_of(selected) {
                let target = (selected.clone(), value);
                if self.display.as_ref() != Some(&target) {
                    self.display = Some(target);
                    plan.display = Some(DisplayUpdate {
                        key: selected.clone(),
                        value,
                    });
                }
            }
        }

        plan
    }

    /// Forget all drawn state.
    pub fn invalidate(&mut self) {
        self.badges.clear();
        self.display = None;
    }
}

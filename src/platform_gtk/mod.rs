//! GTK4 glue: draws a chart into a `DrawingArea` and feeds it pointer and
//! frame-clock events.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{ClusterScatterChart, PredictionTrendChart};
use crate::core::Viewport;
use crate::error::ChartResult;
use crate::interaction::HoverTransition;
use crate::render::CairoRenderer;

/// Chart surface operations the GTK adapter drives.
pub trait InteractiveChart {
    fn viewport(&self) -> Viewport;
    fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<HoverTransition>;
    fn pointer_leave(&mut self) -> ChartResult<HoverTransition>;
    fn advance_animations(&mut self, delta_seconds: f64) -> ChartResult<bool>;
    fn is_animating(&self) -> bool;
    fn paint(&mut self, context: &gtk::cairo::Context) -> ChartResult<()>;
    fn teardown(&mut self);
}

macro_rules! impl_interactive_chart {
    ($chart:ty) => {
        impl InteractiveChart for $chart {
            fn viewport(&self) -> Viewport {
                self.config().viewport
            }

            fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<HoverTransition> {
                <$chart>::pointer_move(self, x, y)
            }

            fn pointer_leave(&mut self) -> ChartResult<HoverTransition> {
                <$chart>::pointer_leave(self)
            }

            fn advance_animations(&mut self, delta_seconds: f64) -> ChartResult<bool> {
                <$chart>::advance_animations(self, delta_seconds)
            }

            fn is_animating(&self) -> bool {
                <$chart>::is_animating(self)
            }

            fn paint(&mut self, context: &gtk::cairo::Context) -> ChartResult<()> {
                self.render_on_cairo_context(context)
            }

            fn teardown(&mut self) {
                <$chart>::teardown(self)
            }
        }
    };
}

impl_interactive_chart!(ClusterScatterChart<CairoRenderer>);
impl_interactive_chart!(PredictionTrendChart<CairoRenderer>);

pub type SharedChart<C> = Rc<RefCell<C>>;

/// Owns a `DrawingArea` bound to one chart.
///
/// Pointer motion, enter and leave go to the chart's hover controller; the
/// frame clock advances emphasis animations while any are running.
pub struct GtkChartAdapter<C: InteractiveChart + 'static> {
    chart: SharedChart<C>,
    drawing_area: gtk::DrawingArea,
    tick_callback: RefCell<Option<gtk::TickCallbackId>>,
}

impl<C: InteractiveChart + 'static> GtkChartAdapter<C> {
    #[must_use]
    pub fn new(chart: C) -> Self {
        let viewport = chart.viewport();
        let chart = Rc::new(RefCell::new(chart));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        {
            let chart = Rc::clone(&chart);
            drawing_area.set_draw_func(move |_, context, _, _| {
                if let Ok(mut chart) = chart.try_borrow_mut() {
                    if let Err(err) = chart.paint(context) {
                        warn!(error = %err, "failed to paint chart");
                    }
                }
            });
        }

        let motion = gtk::EventControllerMotion::new();
        {
            let chart = Rc::clone(&chart);
            let drawing_area = drawing_area.clone();
            motion.connect_enter(move |_, x, y| {
                forward_pointer(&chart, &drawing_area, |chart| chart.pointer_move(x, y));
            });
        }
        {
            let chart = Rc::clone(&chart);
            let drawing_area = drawing_area.clone();
            motion.connect_motion(move |_, x, y| {
                forward_pointer(&chart, &drawing_area, |chart| chart.pointer_move(x, y));
            });
        }
        {
            let chart = Rc::clone(&chart);
            let drawing_area = drawing_area.clone();
            motion.connect_leave(move |_| {
                forward_pointer(&chart, &drawing_area, C::pointer_leave);
            });
        }
        drawing_area.add_controller(motion);

        let last_frame_time = Rc::new(Cell::new(None::<i64>));
        let tick_callback = {
            let chart = Rc::clone(&chart);
            drawing_area.add_tick_callback(move |widget, clock| {
                let now = clock.frame_time();
                let previous = last_frame_time.replace(Some(now));
                let Ok(mut chart) = chart.try_borrow_mut() else {
                    return gtk::glib::ControlFlow::Continue;
                };
                if !chart.is_animating() {
                    return gtk::glib::ControlFlow::Continue;
                }
                let delta_seconds = previous.map_or(0.0, |previous| {
                    (now - previous) as f64 / 1_000_000.0
                });
                match chart.advance_animations(delta_seconds) {
                    Ok(true) => widget.queue_draw(),
                    Ok(false) => {}
                    Err(err) => warn!(error = %err, "failed to advance chart animation"),
                }
                gtk::glib::ControlFlow::Continue
            })
        };

        Self {
            chart,
            drawing_area,
            tick_callback: RefCell::new(Some(tick_callback)),
        }
    }

    #[must_use]
    pub fn chart(&self) -> SharedChart<C> {
        Rc::clone(&self.chart)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Stops the frame clock hook and detaches the chart. Idempotent.
    pub fn detach(&self) {
        if let Some(tick_callback) = self.tick_callback.borrow_mut().take() {
            tick_callback.remove();
        }
        if let Ok(mut chart) = self.chart.try_borrow_mut() {
            chart.teardown();
        }
        self.drawing_area.queue_draw();
    }
}

impl<C: InteractiveChart + 'static> Drop for GtkChartAdapter<C> {
    fn drop(&mut self) {
        self.detach();
    }
}

fn forward_pointer<C, F>(chart: &SharedChart<C>, drawing_area: &gtk::DrawingArea, event: F)
where
    C: InteractiveChart,
    F: FnOnce(&mut C) -> ChartResult<HoverTransition>,
{
    let Ok(mut chart) = chart.try_borrow_mut() else {
        return;
    };
    match event(&mut *chart) {
        Ok(HoverTransition::Unchanged) => {}
        Ok(_) => drawing_area.queue_draw(),
        Err(err) => warn!(error = %err, "failed to handle pointer event"),
    }
}

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;

use crate::chart::{view, ChartState, Point};
use crate::config;
use crate::data::Dimension;
use crate::events::AppEvent;
use crate::gui::theme::{self, ChartTheme};

pub struct AppModel {
    pub state: Rc<RefCell<ChartState>>,
    pub config_path: PathBuf,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    CursorMove(Point),
    CursorLeave,
    Click,
    Resize(i32, i32),
    Focus(Dimension),
    Overview,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Focus(dim) => AppMsg::Focus(dim),
            AppEvent::Overview => AppMsg::Overview,
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (ChartState, PathBuf, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Snowflake"),
            set_default_width: 520,
            set_default_height: 520,
            add_css_class: "snowflake-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Overview);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "snowflake-drawing-area",

                connect_resize[sender] => move |_, w, h| {
                    sender.input(AppMsg::Resize(w, h));
                },

                add_controller = gtk::EventControllerMotion {
                    connect_motion[sender] => move |_, x, y| {
                        sender.input(AppMsg::CursorMove(Point::new(x, y)));
                    },
                    connect_leave[sender] => move |_| {
                        sender.input(AppMsg::CursorLeave);
                    }
                },

                add_controller = gtk::GestureClick {
                    connect_released[sender] => move |_, _, _, _| {
                        sender.input(AppMsg::Click);
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (state, config_path, rx) = init;

        theme::load_css();

        let state = Rc::new(RefCell::new(state));

        let model = AppModel {
            state: state.clone(),
            config_path,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.state.clone();
        let chart_theme = ChartTheme::default();
        widgets.drawing_area.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = view::draw(cr, &state_draw.borrow(), &chart_theme) {
                log::error!("Drawing error: {}", e);
            }
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::CursorMove(point) => {
                if self.state.borrow_mut().update_cursor(point) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::CursorLeave => {
                if self.state.borrow_mut().clear_hover() {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Click => {
                // an activated slice switches the chart into focus mode
                let activated = self.state.borrow().activation();
                if let Some(dim) = activated {
                    log::info!("Dimension activated: {}", dim);
                    self.state.borrow_mut().focus(dim);
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Resize(w, h) => {
                self.state.borrow_mut().resize(w as f64, h as f64);
                self.drawing_area.queue_draw();
            }
            AppMsg::Focus(dim) => {
                self.state.borrow_mut().focus(dim);
                self.drawing_area.queue_draw();
            }
            AppMsg::Overview => {
                self.state.borrow_mut().overview();
                self.drawing_area.queue_draw();
            }
            AppMsg::ConfigReload => {
                let cfg = config::load_or_default(Some(&self.config_path));
                self.state.borrow_mut().dimensions = cfg.into_dimensions();
                self.drawing_area.queue_draw();
                log::info!("Configuration reloaded");
            }
        }
    }
}

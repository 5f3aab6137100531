use crate::dto::*;
use crate::gesture::*;
use crate::grid::*;
use crate::input::*;
use crate::present::*;
use crate::range::Summary;
use wasm_bindgen::prelude::*;

/// Presenter backed by JavaScript callbacks.
///
/// selected(row, col, hand), deselected(row, col, hand),
/// highlight(row, col, class), unhighlight(), summarize(summary)
struct Callbacks {
    selected: js_sys::Function,
    deselected: js_sys::Function,
    highlight: js_sys::Function,
    unhighlight: js_sys::Function,
    summarize: js_sys::Function,
}

impl Callbacks {
    fn cell(p: Position, label: String) -> [JsValue; 3] {
        [
            JsValue::from(p.row()),
            JsValue::from(p.col()),
            JsValue::from(label),
        ]
    }
    fn invoke(f: &js_sys::Function, args: &[JsValue]) {
        let this = JsValue::NULL;
        let result = match args {
            [] => f.call0(&this),
            [a] => f.call1(&this, a),
            [a, b, c] => f.call3(&this, a, b, c),
            _ => f.apply(&this, &args.iter().collect::<js_sys::Array>()),
        };
        if let Err(e) = result {
            log::error!("presenter callback failed: {:?}", e);
        }
    }
}

impl Presenter for Callbacks {
    fn selected(&mut self, p: Position, h: Hand) {
        Self::invoke(&self.selected, &Self::cell(p, h.to_string()));
    }
    fn deselected(&mut self, p: Position, h: Hand) {
        Self::invoke(&self.deselected, &Self::cell(p, h.to_string()));
    }
    fn highlight(&mut self, p: Position, kind: Highlight) {
        Self::invoke(&self.highlight, &Self::cell(p, kind.to_string()));
    }
    fn unhighlight(&mut self) {
        Self::invoke(&self.unhighlight, &[]);
    }
    fn summarize(&mut self, s: &Summary) {
        match json(&ApiSummary::from(s)) {
            Ok(summary) => Self::invoke(&self.summarize, &[summary]),
            Err(e) => log::error!("summary serialization failed: {:?}", e),
        }
    }
}

fn json<T>(value: &T) -> Result<JsValue, JsValue>
where
    T: serde::Serialize,
{
    let text = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&text)
}

fn position(row: usize, col: usize) -> Result<Position, JsValue> {
    Position::try_from((row, col)).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn hand(label: &str) -> Result<Hand, JsValue> {
    Hand::try_from(label).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// One range grid widget. The page builds the cells and forwards its DOM
/// events here; every return value says whether to `preventDefault`.
#[wasm_bindgen]
pub struct WasmRangeGrid {
    controller: Controller<Callbacks>,
    adapter: Adapter,
}

#[wasm_bindgen]
impl WasmRangeGrid {
    #[wasm_bindgen(constructor)]
    pub fn new(
        selected: js_sys::Function,
        deselected: js_sys::Function,
        highlight: js_sys::Function,
        unhighlight: js_sys::Function,
        summarize: js_sys::Function,
    ) -> Self {
        let callbacks = Callbacks {
            selected,
            deselected,
            highlight,
            unhighlight,
            summarize,
        };
        Self {
            controller: Controller::new(callbacks),
            adapter: Adapter::default(),
        }
    }

    /// Refresh the summary on every painted cell instead of on release.
    #[wasm_bindgen]
    pub fn set_live(&mut self, live: bool) {
        self.controller.set_live(live);
    }

    #[wasm_bindgen]
    pub fn set_bounds(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.adapter.resize(Bounds::new(left, top, width, height));
    }

    #[wasm_bindgen]
    pub fn cells(&self) -> Result<JsValue, JsValue> {
        let cells = Position::all()
            .map(|p| ApiCell::from((p, self.controller.grid().hand_at(p))))
            .collect::<Vec<_>>();
        json(&cells)
    }

    /// Cells previewed by the open gesture, with their CSS class.
    #[wasm_bindgen]
    pub fn preview(&self) -> Result<JsValue, JsValue> {
        let kind = match self.controller.session().map(Session::mode) {
            Some(Mode::ShiftFill) => Highlight::Fill,
            Some(Mode::RectErase) => Highlight::Erase,
            _ => return json(&Vec::<ApiHighlight>::new()),
        };
        let cells = self
            .controller
            .session()
            .map(Session::temporary)
            .unwrap_or_default()
            .map(|p| ApiHighlight::from((p, kind)))
            .collect::<Vec<_>>();
        json(&cells)
    }

    #[wasm_bindgen]
    pub fn mouse_down(&mut self, row: usize, col: usize, button: i16, shift: bool) -> Result<bool, JsValue> {
        let at = position(row, col)?;
        Ok(self.forward(Device::MouseDown { at, button, shift }))
    }

    #[wasm_bindgen]
    pub fn mouse_enter(&mut self, row: usize, col: usize, shift: bool) -> Result<bool, JsValue> {
        let at = position(row, col)?;
        Ok(self.forward(Device::MouseEnter { at, shift }))
    }

    #[wasm_bindgen]
    pub fn mouse_up(&mut self) -> bool {
        self.forward(Device::MouseUp)
    }

    #[wasm_bindgen]
    pub fn touch_start(&mut self, touches: usize, x: f64, y: f64) -> bool {
        self.forward(Device::TouchStart { touches, x, y })
    }

    #[wasm_bindgen]
    pub fn touch_move(&mut self, x: f64, y: f64) -> bool {
        self.forward(Device::TouchMove { x, y })
    }

    #[wasm_bindgen]
    pub fn touch_end(&mut self) -> bool {
        self.forward(Device::TouchEnd)
    }

    #[wasm_bindgen]
    pub fn context_menu(&mut self, x: f64, y: f64) -> bool {
        self.forward(Device::ContextMenu { x, y })
    }

    #[wasm_bindgen]
    pub fn cancel(&mut self) {
        self.controller.cancel();
    }

    /// Mode control button pressed. Returns the sticky mode now in effect.
    #[wasm_bindgen]
    pub fn toggle(&mut self, mode: &str) -> Result<Option<String>, JsValue> {
        let mode = Mode::try_from(mode).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.controller.toggle(mode).map(|m| m.to_string()))
    }

    #[wasm_bindgen]
    pub fn sticky(&self) -> Option<String> {
        self.controller.sticky().map(|m| m.to_string())
    }

    #[wasm_bindgen]
    pub fn select(&mut self, label: &str) -> Result<bool, JsValue> {
        Ok(self.controller.select(hand(label)?))
    }

    #[wasm_bindgen]
    pub fn deselect(&mut self, label: &str) -> Result<bool, JsValue> {
        Ok(self.controller.deselect(hand(label)?))
    }

    #[wasm_bindgen]
    pub fn contains(&self, label: &str) -> Result<bool, JsValue> {
        Ok(self.controller.range().contains(&hand(label)?))
    }

    #[wasm_bindgen]
    pub fn summary(&self) -> Result<JsValue, JsValue> {
        json(&ApiSummary::from(&self.controller.range().summary()))
    }

    #[wasm_bindgen]
    pub fn into_string(&self) -> String {
        self.controller.range().to_string()
    }
}

impl WasmRangeGrid {
    fn forward(&mut self, event: Device) -> bool {
        let translation = self.adapter.translate(event);
        if let Some(gesture) = translation.gesture {
            self.controller.dispatch(gesture);
        }
        translation.suppress
    }
}

/// `log` backend writing to the browser console.
struct Console;

static CONSOLE: Console = Console;

impl log::Log for Console {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }
    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("{:<6}{}", record.level(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line),
        }
    }
    fn flush(&self) {}
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if log::set_logger(&CONSOLE).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

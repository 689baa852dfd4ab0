//! Shared harness for the browser tests: a recording stub ApiClient, a
//! recording navigator/notifier pair, and small DOM helpers.

#![allow(dead_code)]

use campusware::backend::{ApiClient, ApiError, Method, RequestDescriptor};
use campusware::utils::navigation::Navigator;
use campusware::utils::notifications::Notifier;
use gloo_timers::future::sleep;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;

#[derive(Clone, Default)]
pub struct RequestLog(Rc<RefCell<Vec<RequestDescriptor>>>);

impl RequestLog {
    pub fn record(&self, descriptor: &RequestDescriptor) {
        self.0.borrow_mut().push(descriptor.clone());
    }

    pub fn all(&self) -> Vec<RequestDescriptor> {
        self.0.borrow().clone()
    }

    pub fn of_method(&self, method: Method) -> Vec<RequestDescriptor> {
        self.0
            .borrow()
            .iter()
            .filter(|descriptor| descriptor.method == method)
            .cloned()
            .collect()
    }
}

/// Canned responses keyed by (method, url). Responses can be swapped
/// mid-test to model backend state changing between refetches.
#[derive(Clone, Default)]
pub struct StubRoutes(Rc<RefCell<Vec<(Method, String, Result<Value, ApiError>)>>>);

impl StubRoutes {
    pub fn set(&self, method: Method, url: &str, result: Result<Value, ApiError>) {
        let mut routes = self.0.borrow_mut();
        routes.retain(|(m, u, _)| !(*m == method && u == url));
        routes.push((method, url.to_string(), result));
    }

    pub fn reply(&self, method: Method, url: &str, body: Value) {
        self.set(method, url, Ok(body));
    }

    pub fn fail(&self, method: Method, url: &str, error: ApiError) {
        self.set(method, url, Err(error));
    }

    fn lookup(&self, descriptor: &RequestDescriptor) -> Result<Value, ApiError> {
        self.0
            .borrow()
            .iter()
            .find(|(method, url, _)| *method == descriptor.method && *url == descriptor.url)
            .map(|(_, _, result)| result.clone())
            .unwrap_or(Err(ApiError::Status { status: 404 }))
    }
}

pub fn stub_client(routes: StubRoutes, log: RequestLog) -> ApiClient {
    stub_client_with_delay(routes, log, 0)
}

pub fn stub_client_with_delay(routes: StubRoutes, log: RequestLog, delay_ms: u64) -> ApiClient {
    ApiClient::new(move |descriptor| {
        log.record(&descriptor);
        let result = routes.lookup(&descriptor);
        Box::pin(async move {
            if delay_ms > 0 {
                sleep(Duration::from_millis(delay_ms)).await;
            }
            result
        })
    })
}

pub fn recording_navigator() -> (Navigator, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(Vec::<String>::new()));
    let pushes = Rc::clone(&log);
    let backs = Rc::clone(&log);
    let navigator = Navigator::new(
        move |path: &str| pushes.borrow_mut().push(path.to_string()),
        move || backs.borrow_mut().push("<back>".to_string()),
    );
    (navigator, log)
}

pub fn recording_notifier() -> (Notifier, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(Vec::<String>::new()));
    let messages = Rc::clone(&log);
    let notifier = Notifier::new(move |message| messages.borrow_mut().push(message));
    (notifier, log)
}

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh mount point; tears down whatever the previous test left behind.
pub fn test_root() -> web_sys::HtmlElement {
    let document = document();
    if let Some(previous) = document.get_element_by_id("test-root") {
        previous.remove();
    }
    let root = document.create_element("div").unwrap();
    root.set_id("test-root");
    document.body().unwrap().append_child(&root).unwrap();
    root.dyn_into().unwrap()
}

pub fn by_test_id(test_id: &str) -> Option<web_sys::Element> {
    document()
        .query_selector(&format!("[data-testid='{test_id}']"))
        .unwrap()
}

pub fn input_by_test_id(test_id: &str) -> web_sys::HtmlInputElement {
    by_test_id(test_id)
        .unwrap_or_else(|| panic!("no element with data-testid {test_id}"))
        .dyn_into()
        .unwrap()
}

pub fn input_value(test_id: &str) -> String {
    input_by_test_id(test_id).value()
}

/// Sets the value and dispatches a bubbling `input` event so delegated
/// listeners see it.
pub fn set_input(test_id: &str, value: &str) {
    let input = input_by_test_id(test_id);
    input.set_value(value);
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

pub fn click(test_id: &str) {
    let element: web_sys::HtmlElement = by_test_id(test_id)
        .unwrap_or_else(|| panic!("no element with data-testid {test_id}"))
        .dyn_into()
        .unwrap();
    element.click();
}

pub fn text_of(test_id: &str) -> String {
    by_test_id(test_id)
        .and_then(|element| element.text_content())
        .unwrap_or_default()
}

pub fn body_text() -> String {
    document()
        .body()
        .and_then(|body| body.text_content())
        .unwrap_or_default()
}

pub async fn tick() {
    sleep(Duration::from_millis(25)).await;
}

/// Polls until the condition holds; fails the test if it never does.
pub async fn wait_for(mut condition: impl FnMut() -> bool) {
    for _ in 0..40 {
        if condition() {
            return;
        }
        sleep(Duration::from_millis(25)).await;
    }
    assert!(condition(), "condition was not met in time");
}

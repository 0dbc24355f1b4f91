use wasm_bindgen::JsValue;

/// Log to JavaScript console with structured data
///
/// # Example
/// ```ignore
/// log_js!("📡 Stream closed", {
///     "code" => event.code(),
///     "reason" => event.reason(),
/// });
/// ```
#[macro_export]
macro_rules! log_js {
    ($message:expr, { $($key:expr => $value:expr),* $(,)? }) => {
        {
            let obj = js_sys::Object::new();
            $(
                let val = $crate::utils::ToJsValue::to_js_value(&$value);
                if !val.is_undefined() {
                    js_sys::Reflect::set(&obj, &$key.into(), &val).unwrap();
                }
            )*
            web_sys::console::log_2(&$message.into(), &obj);
        }
    };
}

/// Helper trait to convert values for JS logging
pub trait ToJsValue {
    fn to_js_value(&self) -> JsValue;
}

impl ToJsValue for &str {
    fn to_js_value(&self) -> JsValue {
        (*self).into()
    }
}

impl ToJsValue for String {
    fn to_js_value(&self) -> JsValue {
        self.clone().into()
    }
}

impl ToJsValue for u16 {
    fn to_js_value(&self) -> JsValue {
        JsValue::from(*self)
    }
}

impl ToJsValue for u32 {
    fn to_js_value(&self) -> JsValue {
        JsValue::from(*self)
    }
}

impl ToJsValue for JsValue {
    fn to_js_value(&self) -> JsValue {
        self.clone()
    }
}

/// Wrapper for logging raw JS values, including event objects that only
/// convert via `Into<JsValue>` on the owned type.
pub struct LogValue<T>(pub T);

impl ToJsValue for LogValue<&JsValue> {
    fn to_js_value(&self) -> JsValue {
        self.0.clone()
    }
}

/// Convert value to JsValue for `log_js!`
#[macro_export]
macro_rules! js_val {
    ($val:expr) => {
        $crate::utils::LogValue($val)
    };
}

use chromiumoxide::cdp::js_protocol::runtime::CallFunctionOnReturns;
use chromiumoxide::element::Element as CrElement;

use crate::error::{Error, Result};

/// Wrapper around a chromiumoxide Element, limited to what form filling needs.
pub struct Element {
    inner: CrElement,
}

impl Element {
    pub(crate) fn new(inner: CrElement) -> Self {
        Self { inner }
    }

    /// Focus this element.
    pub async fn focus(&self) -> Result<()> {
        self.inner.focus().await.map_err(Error::CdpError)?;
        Ok(())
    }

    /// Type text into this element via CDP key events.
    pub async fn type_text(&self, text: &str) -> Result<()> {
        self.focus().await?;
        self.inner.type_str(text).await.map_err(Error::CdpError)?;
        Ok(())
    }

    /// Empty an input and let the page's listeners see the change.
    pub async fn clear(&self) -> Result<()> {
        self.call(
            "function() { \
                this.value = ''; \
                this.dispatchEvent(new Event('input', { bubbles: true })); \
                this.dispatchEvent(new Event('change', { bubbles: true })); \
            }",
        )
        .await
    }

    /// Current `value` property, or an empty string when the element has none.
    pub async fn value(&self) -> Result<String> {
        let value = self
            .inner
            .property("value")
            .await
            .map_err(Error::CdpError)?;
        Ok(match value {
            Some(serde_json::Value::String(s)) => s,
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        })
    }

    /// Select the `<option>` of this `<select>` whose value equals `value`.
    /// Fails when no such option exists rather than leaving the control unset.
    pub async fn select_by_value(&self, value: &str) -> Result<()> {
        let value_js = serde_json::to_string(value).map_err(|e| Error::JsError(e.to_string()))?;
        let js = format!(
            r#"
            function() {{
                const wanted = {value_js};
                if (this.tagName !== 'SELECT') throw new Error('element is not a <select>');
                if (!Array.from(this.options).some(o => o.value === wanted)) {{
                    throw new Error('Cannot locate option with value: ' + wanted);
                }}
                this.value = wanted;
                this.dispatchEvent(new Event('change', {{ bubbles: true }}));
            }}
            "#,
        );
        self.call(js).await
    }

    async fn call(&self, function_declaration: impl Into<String>) -> Result<()> {
        let returns: CallFunctionOnReturns = self
            .inner
            .call_js_fn(function_declaration, false)
            .await
            .map_err(Error::CdpError)?;
        match returns.exception_details {
            None => Ok(()),
            Some(details) => {
                let description = details
                    .exception
                    .and_then(|e| e.description)
                    .unwrap_or(details.text);
                Err(Error::JsError(description))
            }
        }
    }
}

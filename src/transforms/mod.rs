mod replace;

pub use replace::{RegexReplace, ThresholdUnwrap};

/// Trait for text transformations in a revert chain
///
/// Each transform handles one rewriting pass over the whole text. Passes
/// never fail: text they do not recognise is left as it is.
pub trait Transform: Send + Sync {
    /// Short name used in debug output
    fn name(&self) -> &str;

    /// Transforms the input text
    ///
    /// # Arguments
    /// * `text` - The text to transform
    ///
    /// # Returns
    /// The transformed text
    fn transform(&self, text: &str) -> String;
}

/// Ordered list of transforms applied one after the other
#[derive(Default)]
pub struct TransformChain {
    order: Vec<Box<dyn Transform>>,
}

impl TransformChain {
    pub fn new() -> Self {
        Self { order: Vec::new() }
    }

    pub fn register<T: Transform + 'static>(&mut self, transform: T) {
        self.order.push(Box::new(transform));
    }

    /// Builder flavour of [`TransformChain::register`]
    pub fn with<T: Transform + 'static>(mut self, transform: T) -> Self {
        self.register(transform);
        self
    }

    /// Names of the registered transforms, in application order
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(|t| t.name()).collect()
    }

    /// Process the text through all registered transforms in sequence
    ///
    /// # Arguments
    /// * `text` - The text to process
    ///
    /// # Returns
    /// The processed text after applying every transform
    pub fn process(&self, text: &str) -> String {
        self.order.iter().fold(text.to_string(), |acc, transform| {
            let next = transform.transform(&acc);
            crate::debug!("[{}] {} -> {} bytes", transform.name(), acc.len(), next.len());
            next
        })
    }
}

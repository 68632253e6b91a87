/// Element whose inline style an effect writes to.
///
/// The browser front-end implements this for DOM elements; tests use a
/// recording stand-in.
pub trait StyleTarget {
    fn set_transform(&self, value: &str);
    fn set_property(&self, name: &str, value: &str);
}

impl<T: StyleTarget + ?Sized> StyleTarget for &T {
    fn set_transform(&self, value: &str) {
        (**self).set_transform(value)
    }

    fn set_property(&self, name: &str, value: &str) {
        (**self).set_property(name, value)
    }
}

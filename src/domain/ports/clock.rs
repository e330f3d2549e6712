//! Clock port - source of "now" for age-based retention

use std::time::SystemTime;

pub trait Clock {
    fn now(&self) -> SystemTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> SystemTime {
        (**self).now()
    }
}

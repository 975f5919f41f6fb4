//! Fullscreen capability
//!
//! Requests are asynchronous and may be refused, so `toggle()` never touches
//! the reported flag. Only platform change notifications (delivered through
//! [`Fullscreen::on_change`]) update it, which also picks up exits the user
//! triggers natively with Escape.

use std::fmt;

use flags_core::prelude::*;

/// Which fullscreen API variants the platform exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VendorSupport {
    pub standard: bool,
    pub webkit: bool,
}

/// A concrete API variant to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenApi {
    Standard,
    Webkit,
}

impl VendorSupport {
    pub fn any(&self) -> bool {
        self.standard || self.webkit
    }

    /// Standard API first, vendor-prefixed as fallback
    pub fn preferred(&self) -> Option<FullscreenApi> {
        if self.standard {
            Some(FullscreenApi::Standard)
        } else if self.webkit {
            Some(FullscreenApi::Webkit)
        } else {
            None
        }
    }
}

/// Platform fullscreen facility
#[cfg_attr(test, mockall::automock)]
pub trait FullscreenPlatform {
    /// Capability probe; no side effects
    fn support(&self) -> VendorSupport;

    /// Whether any element currently holds fullscreen
    fn is_fullscreen(&self) -> bool;

    /// Ask for fullscreen on the application root
    fn request(&mut self, api: FullscreenApi) -> Result<()>;

    fn exit(&mut self, api: FullscreenApi) -> Result<()>;

    /// Start delivering change notifications (all variants)
    fn subscribe(&mut self) -> Result<()>;

    fn unsubscribe(&mut self);
}

/// Fullscreen toggle with support detection and change tracking
pub struct Fullscreen<P: FullscreenPlatform> {
    platform: P,
    api: Option<FullscreenApi>,
    is_fullscreen: bool,
    subscribed: bool,
}

impl<P: FullscreenPlatform> Fullscreen<P> {
    /// Probe support once and subscribe to change notifications
    pub fn new(mut platform: P) -> Self {
        let support = platform.support();
        let api = support.preferred();

        let subscribed = match api {
            Some(_) => platform
                .subscribe()
                .absorb("Subscribing to fullscreen changes")
                .is_some(),
            None => {
                info!("Fullscreen not available");
                false
            }
        };
        let is_fullscreen = api.is_some() && platform.is_fullscreen();

        debug!("Fullscreen support {:?}, using {:?}", support, api);
        Self {
            platform,
            api,
            is_fullscreen,
            subscribed,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.api.is_some()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn api(&self) -> Option<FullscreenApi> {
        self.api
    }

    /// Request fullscreen, or exit it if something is already fullscreen.
    ///
    /// The reported flag is left alone until `on_change()`.
    pub fn toggle(&mut self) {
        let Some(api) = self.api else {
            debug!("Fullscreen toggle ignored, unsupported");
            return;
        };

        let result = if self.platform.is_fullscreen() {
            self.platform.exit(api)
        } else {
            self.platform.request(api)
        };

        if let Err(e) = result {
            debug!("Fullscreen toggle rejected: {}", e);
        }
    }

    /// Recompute the flag after a platform notification.
    ///
    /// Returns whether it changed.
    pub fn on_change(&mut self) -> bool {
        let now = self.platform.is_fullscreen();
        let changed = now != self.is_fullscreen;
        self.is_fullscreen = now;
        if changed {
            debug!("Fullscreen is now {}", now);
        }
        changed
    }
}

impl<P: FullscreenPlatform> Drop for Fullscreen<P> {
    fn drop(&mut self) {
        if self.subscribed {
            self.platform.unsubscribe();
            self.subscribed = false;
        }
    }
}

impl<P: FullscreenPlatform> fmt::Debug for Fullscreen<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fullscreen")
            .field("api", &self.api)
            .field("is_fullscreen", &self.is_fullscreen)
            .field("subscribed", &self.subscribed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn supported_mock(fullscreen: bool) -> MockFullscreenPlatform {
        let mut platform = MockFullscreenPlatform::new();
        platform.expect_support().return_const(VendorSupport {
            standard: true,
            webkit: true,
        });
        platform.expect_subscribe().times(1).returning(|| Ok(()));
        platform.expect_unsubscribe().times(1).return_const(());
        platform.expect_is_fullscreen().return_const(fullscreen);
        platform
    }

    #[test]
    fn test_preferred_api_order() {
        let both = VendorSupport {
            standard: true,
            webkit: true,
        };
        let webkit = VendorSupport {
            standard: false,
            webkit: true,
        };
        assert_eq!(both.preferred(), Some(FullscreenApi::Standard));
        assert_eq!(webkit.preferred(), Some(FullscreenApi::Webkit));
        assert_eq!(VendorSupport::default().preferred(), None);
        assert!(!VendorSupport::default().any());
    }

    #[test]
    fn test_toggle_requests_once_when_not_fullscreen() {
        let mut platform = supported_mock(false);
        platform
            .expect_request()
            .with(eq(FullscreenApi::Standard))
            .times(1)
            .returning(|_| Ok(()));
        platform.expect_exit().never();

        let mut fullscreen = Fullscreen::new(platform);
        fullscreen.toggle();
        assert!(!fullscreen.is_fullscreen());
    }

    #[test]
    fn test_toggle_exits_once_when_fullscreen() {
        let mut platform = supported_mock(true);
        platform.expect_request().never();
        platform
            .expect_exit()
            .with(eq(FullscreenApi::Standard))
            .times(1)
            .returning(|_| Ok(()));

        let mut fullscreen = Fullscreen::new(platform);
        assert!(fullscreen.is_fullscreen());
        fullscreen.toggle();
        assert!(fullscreen.is_fullscreen());
    }

    #[test]
    fn test_webkit_fallback() {
        let mut platform = MockFullscreenPlatform::new();
        platform.expect_support().return_const(VendorSupport {
            standard: false,
            webkit: true,
        });
        platform.expect_subscribe().returning(|| Ok(()));
        platform.expect_unsubscribe().return_const(());
        platform.expect_is_fullscreen().return_const(false);
        platform
            .expect_request()
            .with(eq(FullscreenApi::Webkit))
            .times(1)
            .returning(|_| Ok(()));

        let mut fullscreen = Fullscreen::new(platform);
        fullscreen.toggle();
    }

    #[test]
    fn test_rejected_request_is_absorbed() {
        let mut platform = supported_mock(false);
        platform
            .expect_request()
            .times(1)
            .returning(|_| Err(Error::fullscreen("no user gesture")));

        let mut fullscreen = Fullscreen::new(platform);
        fullscreen.toggle();
        assert!(!fullscreen.is_fullscreen());
    }

    #[test]
    fn test_unsupported_never_touches_platform() {
        let mut platform = MockFullscreenPlatform::new();
        platform
            .expect_support()
            .return_const(VendorSupport::default());
        platform.expect_subscribe().never();
        platform.expect_unsubscribe().never();
        platform.expect_request().never();
        platform.expect_exit().never();
        platform.expect_is_fullscreen().return_const(false);

        let mut fullscreen = Fullscreen::new(platform);
        assert!(!fullscreen.is_supported());
        fullscreen.toggle();
    }

    /// Fake whose fullscreen element is driven by the test
    struct FakePlatform {
        element: Rc<Cell<bool>>,
        unsubscribed: Rc<RefCell<bool>>,
    }

    impl FullscreenPlatform for FakePlatform {
        fn support(&self) -> VendorSupport {
            VendorSupport {
                standard: true,
                webkit: false,
            }
        }

        fn is_fullscreen(&self) -> bool {
            self.element.get()
        }

        fn request(&mut self, _api: FullscreenApi) -> Result<()> {
            Ok(())
        }

        fn exit(&mut self, _api: FullscreenApi) -> Result<()> {
            Ok(())
        }

        fn subscribe(&mut self) -> Result<()> {
            Ok(())
        }

        fn unsubscribe(&mut self) {
            *self.unsubscribed.borrow_mut() = true;
        }
    }

    #[test]
    fn test_flag_changes_only_on_notification() {
        let element = Rc::new(Cell::new(false));
        let unsubscribed = Rc::new(RefCell::new(false));
        let mut fullscreen = Fullscreen::new(FakePlatform {
            element: Rc::clone(&element),
            unsubscribed: Rc::clone(&unsubscribed),
        });

        fullscreen.toggle();
        element.set(true);
        assert!(!fullscreen.is_fullscreen());

        assert!(fullscreen.on_change());
        assert!(fullscreen.is_fullscreen());

        // User pressed Escape; the platform exits on its own
        element.set(false);
        assert!(fullscreen.on_change());
        assert!(!fullscreen.is_fullscreen());
        assert!(!fullscreen.on_change());

        drop(fullscreen);
        assert!(*unsubscribed.borrow());
    }

    #[test]
    fn test_failed_subscription_skips_unsubscribe() {
        let mut platform = MockFullscreenPlatform::new();
        platform.expect_support().return_const(VendorSupport {
            standard: true,
            webkit: false,
        });
        platform
            .expect_subscribe()
            .returning(|| Err(Error::fullscreen("no document")));
        platform.expect_unsubscribe().never();
        platform.expect_is_fullscreen().return_const(false);

        let fullscreen = Fullscreen::new(platform);
        assert!(fullscreen.is_supported());
    }
}

// Host-side tests for the parallax and tilt effects, driven through a
// recording style target instead of the DOM.

use glam::Vec2;
use pointer_fx_core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default, Clone)]
struct Recorder {
    transforms: Rc<RefCell<Vec<String>>>,
    properties: Rc<RefCell<Vec<(String, String)>>>,
}

impl Recorder {
    fn last_transform(&self) -> Option<String> {
        self.transforms.borrow().last().cloned()
    }

    fn last_property(&self, name: &str) -> Option<String> {
        self.properties
            .borrow()
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }
}

impl StyleTarget for Recorder {
    fn set_transform(&self, value: &str) {
        self.transforms.borrow_mut().push(value.to_string());
    }

    fn set_property(&self, name: &str, value: &str) {
        self.properties
            .borrow_mut()
            .push((name.to_string(), value.to_string()));
    }
}

fn default_layers() -> Vec<(Recorder, ParallaxLayer<Recorder>)> {
    PARALLAX_LAYERS
        .iter()
        .map(|&(_, speed)| {
            let r = Recorder::default();
            (
                r.clone(),
                ParallaxLayer {
                    target: r,
                    speed,
                },
            )
        })
        .collect()
}

fn viewport() -> Viewport {
    Viewport::new(1000.0, 1000.0)
}

#[test]
fn parallax_without_layers_is_not_mounted() {
    let fx = ParallaxEffect::<Recorder>::mount(Vec::new(), viewport(), ParallaxParams::default());
    assert!(matches!(fx, Ok(None)));
}

#[test]
fn tilt_without_card_is_not_mounted() {
    let fx = TiltEffect::<Recorder>::mount(None, viewport(), TiltParams::default());
    assert!(matches!(fx, Ok(None)));
}

#[test]
fn parallax_rejects_bad_params() {
    let (_, layer) = default_layers().remove(0);
    let params = ParallaxParams {
        damping: 0.0,
        ..ParallaxParams::default()
    };
    assert!(matches!(
        ParallaxEffect::mount(vec![layer], viewport(), params),
        Err(FxError::InvalidDamping(_))
    ));

    let bad = ParallaxLayer {
        target: Recorder::default(),
        speed: f32::NAN,
    };
    assert!(matches!(
        ParallaxEffect::mount(vec![bad], viewport(), ParallaxParams::default()),
        Err(FxError::InvalidSpeed(_))
    ));
}

#[test]
fn parallax_converges_to_negative_offset() {
    let pairs = default_layers();
    let recorders: Vec<Recorder> = pairs.iter().map(|(r, _)| r.clone()).collect();
    let mut fx = ParallaxEffect::mount(
        pairs.into_iter().map(|(_, l)| l),
        viewport(),
        ParallaxParams::default(),
    )
    .unwrap()
    .unwrap();
    assert_eq!(fx.layer_count(), 3);

    // Right edge of the viewport: target x = 1.0.
    fx.on_pointer_move(1000.0, 500.0);
    for _ in 0..1000 {
        fx.tick();
    }
    let settled: Vec<Vec2> = fx.settled_offsets().collect();
    assert!((settled[1].x + 5.0).abs() < 1e-4);
    assert!(settled[1].y.abs() < 1e-6);

    let mid = recorders[1].last_transform().unwrap();
    assert!(mid.starts_with("translate3d(-"), "{mid}");
    let x: f32 = mid
        .trim_start_matches("translate3d(")
        .split("px")
        .next()
        .unwrap()
        .parse()
        .unwrap();
    assert!((x + 5.0).abs() < 1e-3);

    // Every layer was written on every frame.
    for r in &recorders {
        assert_eq!(r.transforms.borrow().len(), 1000);
    }
}

#[test]
fn parallax_slower_layers_move_less() {
    let pairs = default_layers();
    let mut fx = ParallaxEffect::mount(
        pairs.into_iter().map(|(_, l)| l),
        viewport(),
        ParallaxParams::default(),
    )
    .unwrap()
    .unwrap();
    fx.on_pointer_move(0.0, 0.0);
    let offs: Vec<Vec2> = fx.settled_offsets().collect();
    assert!(offs[0].x < offs[1].x && offs[1].x < offs[2].x);
    assert!(offs.iter().all(|o| o.x > 0.0 && o.y > 0.0));
}

#[test]
fn parallax_resize_recenters_without_touching_signals() {
    let (_, layer) = default_layers().remove(0);
    let mut fx = ParallaxEffect::mount(vec![layer], viewport(), ParallaxParams::default())
        .unwrap()
        .unwrap();
    fx.on_pointer_move(750.0, 500.0);
    fx.tick();
    let before = (fx.tracker().target(), fx.tracker().current());

    fx.on_resize(Viewport::new(500.0, 500.0)).unwrap();
    assert_eq!((fx.tracker().target(), fx.tracker().current()), before);

    fx.on_pointer_move(500.0, 250.0);
    assert_eq!(fx.tracker().target(), Vec2::new(1.0, 0.0));

    assert!(fx.on_resize(Viewport::new(0.0, 0.0)).is_err());
    assert_eq!(fx.tracker().frame().center(), Vec2::new(250.0, 250.0));
}

#[test]
fn tilt_scenario_half_viewport_is_half_tilt() {
    let card = Recorder::default();
    let mut fx = TiltEffect::mount(Some(card.clone()), viewport(), TiltParams::default())
        .unwrap()
        .unwrap();
    fx.on_pointer_move(Vec2::new(750.0, 500.0), Vec2::new(500.0, 500.0));
    let target = fx.target_pose();
    assert!((target.rotate_y_deg - 4.0).abs() < 1e-5);
    assert_eq!(target.rotate_x_deg, 0.0);

    let first = fx.tick();
    assert!((first.rotate_y_deg - 4.0 * 0.08).abs() < 1e-5);
    assert_eq!(
        card.last_transform().unwrap(),
        TiltPose::from_signal(fx.tracker().current(), 8.0).transform_css(&fx.params())
    );
    assert!(card.last_property(GLOSS_X_PROPERTY).is_some());
    assert_eq!(card.last_property(GLOSS_Y_PROPERTY).unwrap(), "50%");
}

#[test]
fn tilt_follows_card_center() {
    let card = Recorder::default();
    let mut fx = TiltEffect::mount(Some(card), viewport(), TiltParams::default())
        .unwrap()
        .unwrap();
    // Pointer right on the card center gives no tilt even off viewport center.
    fx.on_pointer_move(Vec2::new(200.0, 300.0), Vec2::new(200.0, 300.0));
    assert_eq!(fx.target_pose().rotate_y_deg, 0.0);
    assert_eq!(fx.target_pose().rotate_x_deg, 0.0);

    // Pointer above the card tips its top edge toward the viewer.
    fx.on_pointer_move(Vec2::new(200.0, 50.0), Vec2::new(200.0, 300.0));
    let pose = fx.target_pose();
    assert!((pose.rotate_x_deg - 4.0).abs() < 1e-5);
    assert!((pose.gloss_y_pct - 30.0).abs() < 1e-4);
}

#[test]
fn tilt_converges_and_rests_at_fixed_point() {
    let card = Recorder::default();
    let mut fx = TiltEffect::mount(Some(card.clone()), viewport(), TiltParams::default())
        .unwrap()
        .unwrap();
    fx.on_pointer_move(Vec2::new(1000.0, 0.0), Vec2::new(500.0, 500.0));
    let mut last = fx.tick();
    for _ in 0..500 {
        let next = fx.tick();
        assert!(next.rotate_y_deg >= last.rotate_y_deg);
        last = next;
    }
    assert!((last.rotate_y_deg - 8.0).abs() < 1e-4);
    assert!((last.rotate_x_deg - 8.0).abs() < 1e-4);
    assert!(fx.tracker().signal().is_settled(1e-5));
}

#[test]
fn tilt_rejects_bad_max_tilt() {
    let params = TiltParams {
        max_tilt_deg: -1.0,
        ..TiltParams::default()
    };
    assert!(matches!(
        TiltEffect::mount(Some(Recorder::default()), viewport(), params),
        Err(FxError::InvalidMaxTilt(_))
    ));
}

use super::*;
use crate::cache::TextureCache;
use crate::scene::Scene;
use crate::tasks::FrameTasks;
use crate::test_support::StubSource;
use crate::view::ViewRegistry;
use std::f32::consts::PI;
use std::rc::Rc;
use vrhome_common::{Action, ViewRole};
use vrhome_config::schema::{default_panels, PanelDefinition, SampleDefinition};

struct Harness {
    source: Rc<StubSource>,
    registry: crate::view::SharedRegistry,
    scene: crate::scene::SharedScene,
    builder: PanelLayoutBuilder,
}

fn harness() -> Harness {
    let source = StubSource::new();
    let cache = Rc::new(TextureCache::new(source.clone(), true));
    let registry = ViewRegistry::shared();
    let scene = Scene::shared();
    let builder = PanelLayoutBuilder::new(registry.clone(), scene.clone(), cache, "refresh.png");
    Harness {
        source,
        registry,
        scene,
        builder,
    }
}

fn panel(samples: usize, refresh: bool) -> PanelDefinition {
    PanelDefinition {
        title: "Panel".into(),
        show_refresh_button: refresh,
        initial_rotation: 0.5,
        samples: (0..samples)
            .map(|i| SampleDefinition::new(&format!("s{i}"), &format!("https://example.com/{i}.html"), "d"))
            .collect(),
    }
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn default_panels_lay_out_every_sample() {
    let h = harness();
    let panels = default_panels();
    let layout = h.builder.build(&panels);

    let expected: usize = panels.iter().map(|p| p.samples.len().min(6)).sum();
    assert_eq!(layout.highlighter.views().len(), expected);
    assert_eq!(h.scene.borrow().panels.len(), panels.len());
    assert_eq!(h.scene.borrow().panels[1].yaw, PI * 0.4);

    let registry = h.registry.borrow();
    let titles = registry.iter().filter(|v| v.role == ViewRole::Title).count();
    assert_eq!(titles, panels.len());
    assert_eq!(registry.ui_views().len(), panels.len() + expected);
    assert_eq!(registry.icons().len(), 1);
}

#[test]
fn title_sits_above_the_grid() {
    let h = harness();
    h.builder.build(&[panel(0, false)]);
    let registry = h.registry.borrow();
    let title = registry.iter().find(|v| v.role == ViewRole::Title).unwrap();
    assert_eq!(title.text, "Panel");
    assert!(!title.interactable);
    assert!(close(title.position.x, -1.0));
    assert!(close(title.position.y, 1.8));
    assert!(close(title.position.z, -3.5));
    assert_eq!(title.frame, vrhome_common::Rect::new(0.0, 0.0, 2.0, 0.5));
}

#[test]
fn samples_fill_a_two_column_grid() {
    let (pos, tilt) = slot_placement(0);
    assert_eq!(pos, glam::Vec3::new(-1.25, 0.8, -3.5));
    assert!(close(tilt, PI / 36.0));

    let (pos, tilt) = slot_placement(3);
    assert_eq!(pos, glam::Vec3::new(1.25, -0.2, -3.5));
    assert!(close(tilt, -PI / 36.0));

    let (pos, _) = slot_placement(4);
    assert_eq!(pos, glam::Vec3::new(-1.25, -1.2, -3.5));
}

#[test]
fn sample_views_carry_action_and_detail() {
    let h = harness();
    let layout = h.builder.build(&[panel(2, false)]);
    let registry = h.registry.borrow();
    let id = layout.highlighter.views()[1];
    let view = registry.get(id).unwrap();
    assert!(view.interactable);
    assert_eq!(view.hit_slop, HIT_SLOP);
    assert_eq!(view.frame, sample_frame());
    assert_eq!(view.action, Some(Action::Navigate("https://example.com/1.html".into())));

    let detail = registry.get(view.detail.unwrap()).unwrap();
    assert_eq!(detail.role, ViewRole::Detail);
    assert_eq!(detail.opacity, 0.0);
    assert!(!detail.interactable);
    assert!(close(detail.position.y, view.position.y - 0.5));
    assert_eq!(detail.rotation, view.rotation);
    assert!(close(detail.frame.width, 3.6));
    assert!(close(detail.frame.height, 0.275));
}

#[test]
fn extra_samples_are_dropped() {
    let h = harness();
    let layout = h.builder.build(&[panel(8, false)]);
    assert_eq!(layout.highlighter.views().len(), 6);
}

#[test]
fn refresh_icon_appears_once_loaded() {
    let h = harness();
    let layout = h.builder.build(&[panel(1, true)]);
    let id = h.registry.borrow().icons()[0];
    {
        let registry = h.registry.borrow();
        let refresh = registry.get(id).unwrap();
        assert_eq!(refresh.opacity, 0.0);
        assert_eq!(refresh.action, Some(Action::Reload));
        assert!(close(refresh.position.y, 2.8));
    }

    let mut tasks = FrameTasks::new();
    tasks.spawn(layout.icon_loads);
    tasks.poll();
    assert_eq!(h.source.calls(), vec!["refresh.png".to_string()]);
    assert_eq!(h.registry.borrow().get(id).unwrap().opacity, 0.0);

    h.source.resolve("refresh.png");
    assert_eq!(tasks.poll(), 1);
    let registry = h.registry.borrow();
    let refresh = registry.get(id).unwrap();
    assert_eq!(refresh.opacity, 1.0);
    assert_eq!(refresh.image.as_ref().unwrap().label(), "refresh.png");
}

#[test]
fn failed_icon_stays_hidden() {
    let h = harness();
    let layout = h.builder.build(&[panel(0, true)]);
    let mut tasks = FrameTasks::new();
    tasks.spawn(layout.icon_loads);
    tasks.poll();
    h.source.fail("refresh.png");
    tasks.poll();
    let id = h.registry.borrow().icons()[0];
    assert_eq!(h.registry.borrow().get(id).unwrap().opacity, 0.0);
}

#[test]
fn icon_from_a_previous_build_is_discarded() {
    let h = harness();
    let first = h.builder.build(&[panel(0, true)]);
    let mut tasks = FrameTasks::new();
    tasks.spawn(first.icon_loads);
    tasks.poll();

    h.registry.borrow_mut().clear();
    h.scene.borrow_mut().clear_panels();
    h.builder.build(&[panel(0, false), panel(0, false)]);

    h.source.resolve("refresh.png");
    tasks.poll();
    assert!(h.registry.borrow().iter().all(|v| v.image.is_none()));
}

#[test]
fn description_wins_over_url() {
    let sample = SampleDefinition::new("x", "https://example.com/a/demo.html", "Short");
    assert_eq!(detail_label(&sample), "Short");
}

#[test]
fn label_falls_back_to_host_and_last_segment() {
    let sample = SampleDefinition {
        text: "x".into(),
        url: "https://example.com/a/b/demo.html?x=1".into(),
        description: None,
    };
    assert_eq!(detail_label(&sample), "example.com - demo.html");
}

#[test]
fn relative_url_label_is_the_url() {
    let sample = SampleDefinition {
        text: "x".into(),
        url: "../Pano/index.html".into(),
        description: Some(String::new()),
    };
    assert_eq!(detail_label(&sample), "../Pano/index.html");
}

#[test]
fn long_labels_are_truncated() {
    let forty = "a".repeat(40);
    let label = truncate_label(&forty);
    assert_eq!(label.chars().count(), 38);
    assert!(label.ends_with("..."));

    let exact = "b".repeat(MAX_LABEL_CHARS);
    assert_eq!(truncate_label(&exact), exact);
}

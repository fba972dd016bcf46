//! Panel and sample definitions.
//!
//! Panels are arranged around the viewer by yaw; each one hosts a title,
//! an optional refresh button and up to [`PANEL_SLOTS`] sample buttons.

use serde::{Deserialize, Serialize};

/// Sample buttons a single panel can lay out (a 2x3 grid).
pub const PANEL_SLOTS: usize = 6;

/// One launchable sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleDefinition {
    pub text: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SampleDefinition {
    pub fn new(text: &str, url: &str, description: &str) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            description: Some(description.into()),
        }
    }
}

/// A titled group of samples placed at `initial_rotation` radians of yaw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelDefinition {
    pub title: String,
    #[serde(alias = "showRefreshButton")]
    pub show_refresh_button: bool,
    #[serde(alias = "initialRotation")]
    pub initial_rotation: f32,
    pub samples: Vec<SampleDefinition>,
}

impl Default for PanelDefinition {
    fn default() -> Self {
        Self {
            title: String::new(),
            show_refresh_button: false,
            initial_rotation: 0.0,
            samples: Vec::new(),
        }
    }
}

/// The stock launcher panels.
pub fn default_panels() -> Vec<PanelDefinition> {
    use std::f32::consts::PI;

    vec![
        PanelDefinition {
            title: "Starter Kit".into(),
            show_refresh_button: true,
            initial_rotation: 0.0,
            samples: vec![
                SampleDefinition::new(
                    "Hello WebVR",
                    "../WebVRSamples/HelloWebVR/index.html",
                    "Intro to the basics of WebVR",
                ),
                SampleDefinition::new(
                    "Gamepad",
                    "../WebVRSamples/Gamepad/index.html",
                    "Gear VR Touchpad as a Gamepad",
                ),
                SampleDefinition::new(
                    "360 Photos",
                    "../WebVRSamples/Pano/index.html",
                    "Displaying 360 Photos",
                ),
                SampleDefinition::new(
                    "VR Navigation",
                    "../WebVRSamples/Navigation/index.html",
                    "HTML 5 Navigation in VR!",
                ),
            ],
        },
        PanelDefinition {
            title: "React VR".into(),
            show_refresh_button: false,
            initial_rotation: PI * 0.4,
            samples: vec![
                SampleDefinition::new(
                    "Hotel Tour",
                    "https://s3.amazonaws.com/static.oculus.com/carmel/TourSample/index.html",
                    "A beautiful virtual hotel tour!",
                ),
                SampleDefinition::new(
                    "Cube Geometry",
                    "https://s3.amazonaws.com/static.oculus.com/carmel/CubeSample/index.html",
                    "Use and Change Cube Geometry!",
                ),
                SampleDefinition::new(
                    "Flexbox Layout",
                    "https://s3.amazonaws.com/static.oculus.com/carmel/LayoutSample/index.html",
                    "Layout UI Panels using Flexbox!",
                ),
                SampleDefinition::new(
                    "Mesh Import",
                    "https://s3.amazonaws.com/static.oculus.com/carmel/MeshSample/index.html",
                    "Combine UI Panels and Meshes!",
                ),
            ],
        },
        PanelDefinition {
            title: "Tech Demos".into(),
            show_refresh_button: false,
            initial_rotation: -PI * 0.4,
            samples: vec![
                SampleDefinition::new(
                    "Konfigurator",
                    "http://vizor.io/sindre/configurator?start_mode=3",
                    "By: Sindre (Breach VR)",
                ),
                SampleDefinition::new(
                    "In Infinity",
                    "http://vizor.io/fthr/yayoi-kusama-in-infinity?start_mode=3",
                    "By: Yayoi Kusama / Vizor",
                ),
                SampleDefinition::new(
                    "Tea Room",
                    "https://playcanv.as/p/VNTAx5Eu/",
                    "By: PlayCanvas",
                ),
                SampleDefinition::new(
                    "Sketchfab",
                    "https://sketchfab.com/vr-browser?carmel=1&query=%7B%22collection%22%3A%221ebffd9adaa74ca498a0d5f05d8b8072%22%7D#4df0f3a261a64195b4d74cb3f830dac1",
                    "By: Sketchfab",
                ),
            ],
        },
    ]
}

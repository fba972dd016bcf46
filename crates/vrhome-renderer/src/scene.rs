//! Scene graph the drawing engine renders: panel roots, the environment
//! meshes and the clear color.

use crate::texture::{CubeTexture, Texture};
use glam::{Quat, Vec3};
use std::cell::RefCell;
use std::f32::consts::FRAC_PI_2;
use std::rc::Rc;
use vrhome_common::{Color, Eye, ViewId};

/// Environment sphere radius; the negative X flips the sphere inside out.
pub const ENVIRONMENT_SCALE: Vec3 = Vec3::new(-1800.0, 1800.0, 1800.0);

/// A panel set's root node. Its views are placed relative to it.
#[derive(Debug, Clone)]
pub struct PanelRoot {
    pub title: String,
    pub yaw: f32,
    pub views: Vec<ViewId>,
}

impl PanelRoot {
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }
}

/// One eye's equirectangular environment sphere.
#[derive(Debug, Clone)]
pub struct EnvironmentMesh {
    pub eye: Eye,
    pub map: Option<Texture>,
    pub attached: bool,
    pub scale: Vec3,
    pub rotation: Quat,
}

impl EnvironmentMesh {
    pub fn new(eye: Eye) -> Self {
        Self {
            eye,
            map: None,
            attached: false,
            scale: ENVIRONMENT_SCALE,
            rotation: Quat::from_rotation_y(FRAC_PI_2),
        }
    }

    pub fn layer(&self) -> u8 {
        self.eye.layer()
    }

    /// Environment spheres never take part in hit testing.
    pub fn raycastable(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub panels: Vec<PanelRoot>,
    pub environment: [EnvironmentMesh; 2],
    pub cube_backgrounds: [Option<CubeTexture>; 2],
    pub clear_color: Color,
}

pub type SharedScene = Rc<RefCell<Scene>>;

impl Default for Scene {
    fn default() -> Self {
        Self {
            panels: Vec::new(),
            environment: [EnvironmentMesh::new(Eye::Left), EnvironmentMesh::new(Eye::Right)],
            cube_backgrounds: [None, None],
            clear_color: Color::from_rgba(0, 0, 0, 255),
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedScene {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn add_panel(&mut self, title: impl Into<String>, yaw: f32) -> usize {
        self.panels.push(PanelRoot {
            title: title.into(),
            yaw,
            views: Vec::new(),
        });
        self.panels.len() - 1
    }

    pub fn panel(&self, index: usize) -> Option<&PanelRoot> {
        self.panels.get(index)
    }

    pub fn attach_view(&mut self, panel: usize, view: ViewId) {
        if let Some(root) = self.panels.get_mut(panel) {
            root.views.push(view);
        }
    }

    pub fn clear_panels(&mut self) {
        self.panels.clear();
    }

    pub fn environment(&self, eye: Eye) -> &EnvironmentMesh {
        &self.environment[eye.index()]
    }

    pub fn detach_environment(&mut self) {
        for mesh in &mut self.environment {
            mesh.attached = false;
        }
    }

    /// Give both meshes their maps and attach them in one step.
    pub fn attach_environment(&mut self, left: Texture, right: Texture) {
        let [l, r] = &mut self.environment;
        l.map = Some(left);
        r.map = Some(right);
        l.attached = true;
        r.attached = true;
    }

    pub fn cube_background(&self, eye: Eye) -> Option<&CubeTexture> {
        self.cube_backgrounds[eye.index()].as_ref()
    }

    pub fn set_cube_background(&mut self, eye: Eye, cube: Option<CubeTexture>) {
        self.cube_backgrounds[eye.index()] = cube;
    }

    pub fn clear_cube_backgrounds(&mut self) {
        self.cube_backgrounds = [None, None];
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::texture;

    #[test]
    fn environment_meshes_start_detached() {
        let scene = Scene::new();
        for eye in Eye::BOTH {
            let mesh = scene.environment(eye);
            assert!(!mesh.attached);
            assert!(mesh.map.is_none());
            assert!(!mesh.raycastable());
            assert_eq!(mesh.layer(), eye.layer());
            assert_eq!(mesh.scale, ENVIRONMENT_SCALE);
        }
    }

    #[test]
    fn attach_sets_both_maps() {
        let mut scene = Scene::new();
        scene.attach_environment(texture("l"), texture("r"));
        assert!(scene.environment(Eye::Left).attached);
        assert_eq!(scene.environment(Eye::Right).map.as_ref().unwrap().label(), "r");
        scene.detach_environment();
        assert!(!scene.environment(Eye::Left).attached);
        assert!(scene.environment(Eye::Left).map.is_some());
    }

    #[test]
    fn views_attach_to_their_panel() {
        let mut scene = Scene::new();
        let a = scene.add_panel("A", 0.0);
        let b = scene.add_panel("B", 1.0);
        scene.attach_view(b, ViewId(3));
        assert!(scene.panel(a).unwrap().views.is_empty());
        assert_eq!(scene.panel(b).unwrap().views, vec![ViewId(3)]);
        scene.clear_panels();
        assert!(scene.panel(a).is_none());
    }
}

//! Environment background swaps.
//!
//! The old environment is taken down immediately so the clear color shows
//! through; the new one is fetched after an idle point. Equirect pairs
//! appear on both eyes in the same frame or not at all. Cube maps are
//! assigned per eye as each one finishes.

use crate::cache::TextureCache;
use crate::scene::SharedScene;
use crate::tasks::idle;
use crate::texture::{CubeTexture, Texture};
use futures_util::future::{join, try_join, try_join_all, LocalBoxFuture};
use futures_util::FutureExt;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, warn};
use vrhome_common::{Eye, ResourceError};
use vrhome_config::EnvironmentDescriptor;

pub struct BackgroundLoader {
    scene: SharedScene,
    cache: Rc<TextureCache>,
    generation: Rc<Cell<u64>>,
}

impl BackgroundLoader {
    pub fn new(scene: SharedScene, cache: Rc<TextureCache>) -> Self {
        Self {
            scene,
            cache,
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Generation of the most recent [`BackgroundLoader::load`] call.
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Replace the environment. Work after the first idle point runs when
    /// the returned future is driven; a later call supersedes it.
    pub fn load(&self, environment: Option<&EnvironmentDescriptor>) -> LocalBoxFuture<'static, ()> {
        {
            let mut scene = self.scene.borrow_mut();
            scene.detach_environment();
            scene.clear_cube_backgrounds();
        }
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let Some(environment) = environment.cloned() else {
            return async {}.boxed_local();
        };

        let scene = self.scene.clone();
        let cache = self.cache.clone();
        let current = self.generation.clone();

        async move {
            idle().await;
            if current.get() != generation {
                return;
            }
            match environment {
                EnvironmentDescriptor::Cube {
                    left,
                    right,
                    initial_orientation,
                } => {
                    let load_eye = |eye: Eye, faces: [String; 6]| {
                        let scene = scene.clone();
                        let current = current.clone();
                        let load = load_cube(&cache, faces, initial_orientation);
                        async move {
                            match load.await {
                                Ok(cube) if current.get() == generation => {
                                    scene.borrow_mut().set_cube_background(eye, Some(cube));
                                    debug!("cube background ready for {eye:?} eye");
                                }
                                Ok(_) => debug!("discarding stale cube background"),
                                Err(e) => warn!("cube background for {eye:?} eye failed: {e}"),
                            }
                        }
                    };
                    join(load_eye(Eye::Left, left), load_eye(Eye::Right, right)).await;
                }
                EnvironmentDescriptor::Equirect { left, right } => {
                    let pair = try_join(cache.get_texture(&left), cache.get_texture(&right)).await;
                    match pair {
                        Ok(_) if current.get() != generation => {
                            debug!("discarding stale environment");
                        }
                        Ok((left, right)) => {
                            scene.borrow_mut().attach_environment(left, right);
                            debug!("environment attached");
                        }
                        Err(e) => warn!("environment failed to load: {e}"),
                    }
                }
            }
        }
        .boxed_local()
    }
}

fn load_cube(
    cache: &TextureCache,
    faces: [String; 6],
    initial_orientation: f32,
) -> LocalBoxFuture<'static, Result<CubeTexture, ResourceError>> {
    let loads: Vec<_> = faces.iter().map(|url| cache.source().load(url)).collect();
    async move {
        let faces: Vec<Texture> = try_join_all(loads).await?;
        let faces: [Texture; 6] = faces
            .try_into()
            .map_err(|_| ResourceError::Abandoned("cube map lost a face".into()))?;
        Ok(CubeTexture {
            faces,
            initial_orientation,
        })
    }
    .boxed_local()
}

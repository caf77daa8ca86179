//! Bake scenarios, end to end through the orchestrator.
use texbake::internal::*;

struct Scene {
	ctx: RenderContext,
	pack: MaterialPack,
}

impl Scene {
	/// Unit quads with the given names, nothing selected.
	fn new(names: &[&str]) -> Self {
		let mut ctx = RenderContext::new();
		for (i, name) in names.iter().enumerate() {
			ctx.add_object(MeshObject::new(*name, unit_quad(0.01 * i as f32)));
		}
		Self {
			ctx,
			pack: MaterialPack::bundled().unwrap(),
		}
	}

	fn id(&self, name: &str) -> ObjectId {
		self.ctx.object_by_name(name).unwrap()
	}

	fn sets(&self) -> Vec<BakeSet> {
		BakeSet::group_by_name(&self.ctx, &self.ctx.object_ids().collect::<Vec<_>>())
	}

	fn bake(&mut self, backend: &mut dyn BakeBackend, request: &BakeRequest, sets: &[BakeSet]) -> Result<BakeOutcome, BakeError> {
		Orchestrator::new(&self.pack, default()).bake(&mut self.ctx, backend, request, sets)
	}

	fn slots(&self, object: &str) -> Vec<String> {
		self.ctx.object(self.id(object)).materials().map(|m| self.ctx.material(m).name.clone()).collect()
	}
}

#[test]
fn ao_self_bake() {
	let mut scene = Scene::new(&["crate_low"]);
	let mut backend = RecordingBackend::new();
	let request = BakeRequest {
		samples: 48,
		..BakeRequest::new("ao", (16, 16))
	};
	let sets = scene.sets();
	let outcome = scene.bake(&mut backend, &request, &sets).unwrap();

	assert_eq!(outcome.passes, 1);
	assert_eq!(backend.calls.len(), 1);
	let call = &backend.calls[0];
	assert_eq!(call.samples, 48);
	assert_eq!(call.params.pass_type, PassType::Ao);
	assert!(!call.params.selected_to_active);
	assert_eq!(call.target.as_deref(), Some("crate_ao"));
	assert_eq!(scene.slots("crate_low"), vec!["bake_target"]);
}

#[test]
fn normal_tangent_high_to_low() {
	let mut scene = Scene::new(&["crate_low", "crate_high"]);
	let mut backend = RecordingBackend::new();
	let sets = scene.sets();
	scene.bake(&mut backend, &BakeRequest::new("normal_tangent", (16, 16)), &sets).unwrap();

	assert_eq!(backend.calls.len(), 1);
	let call = &backend.calls[0];
	assert!(call.params.selected_to_active);
	assert_eq!(call.params.normal_space, NormalSpace::Tangent);
	assert_eq!(call.params.cage_extrusion, BakeRequest::default().ray_distance);
	assert_eq!(call.active.as_deref(), Some("crate_low"));
	assert_eq!(call.selected, vec!["crate_low".to_owned(), "crate_high".to_owned()]);

	assert_eq!(scene.slots("crate_low"), vec!["bake_target"]);
	assert!(scene.slots("crate_high").is_empty());
}

#[test]
fn dust_high_to_low_loads_material_and_vertex_colors() {
	let mut scene = Scene::new(&["rock_low", "rock_high"]);
	let mut backend = RecordingBackend::new();
	let sets = scene.sets();
	scene.bake(&mut backend, &BakeRequest::new("dust", (16, 16)), &sets).unwrap();

	assert_eq!(backend.calls[0].samples, 1);
	assert_eq!(scene.slots("rock_high"), vec!["bake_dust"]);
	assert_eq!(scene.slots("rock_low"), vec!["bake_target"]);
	assert!(scene.ctx.object(scene.id("rock_high")).mesh.color_layer(VertexColors::LAYER).is_some());
	assert!(scene.ctx.object(scene.id("rock_low")).mesh.color_layer(VertexColors::LAYER).is_none());

	// baking again reuses the materials
	scene.bake(&mut backend, &BakeRequest::new("dust", (16, 16)), &sets).unwrap();
	assert_eq!(scene.ctx.materials().filter(|(_, m)| m.name.starts_with("bake_dust")).count(), 1);
	assert_eq!(scene.ctx.materials().filter(|(_, m)| m.name.starts_with("bake_target")).count(), 1);
}

/// Paints the target red, recording what it saw first.
#[derive(Default)]
struct PaintingBackend {
	seen: Vec<(String, (u32, u32), Rgba)>,
}

const RED: Rgba = [1.0, 0.0, 0.0, 1.0];

impl BakeBackend for PaintingBackend {
	fn bake(&mut self, ctx: &mut RenderContext, _: &BakeParams) -> Result<(), BackendError> {
		let active = ctx.active().ok_or_else(|| BackendError::new("no active object"))?;
		let target = bake_target(ctx, active).ok_or_else(|| BackendError::new("no target"))?;
		let img = ctx.image_mut(target);
		self.seen.push((img.name.clone(), img.size(), img.at(0, 0)));
		img.fill(RED);
		Ok(())
	}
}

#[test]
fn two_sets_single_image() {
	let mut scene = Scene::new(&["a_low", "b_low"]);
	let mut backend = PaintingBackend::default();
	let request = BakeRequest {
		bake_single_image: true,
		sampling_scale: 2,
		..BakeRequest::new("ao", (8, 4))
	};
	let sets = scene.sets();
	let outcome = scene.bake(&mut backend, &request, &sets).unwrap();

	// one image, cleared before the first set only, downsampled after the last set only
	let white = [1.0; 4];
	assert_eq!(backend.seen, vec![("a_ao".to_owned(), (16, 8), white), ("a_ao".to_owned(), (16, 8), RED)]);
	assert_eq!(outcome.images.len(), 1);
	assert_eq!(scene.ctx.image_count(), 1);
	let img = scene.ctx.image(outcome.images[0]);
	assert_eq!(img.size(), (8, 4));
	let c = img.at(0, 0);
	assert!(c[0] > 0.99 && c[1] < 0.01, "{c:?}");
}

#[test]
fn two_sets_separate_images() {
	let mut scene = Scene::new(&["a_low", "b_low"]);
	let mut backend = PaintingBackend::default();
	let request = BakeRequest {
		sampling_scale: 2,
		..BakeRequest::new("diffuse", (8, 4))
	};
	let sets = scene.sets();
	let outcome = scene.bake(&mut backend, &request, &sets).unwrap();

	let gray = BakeMode::Diffuse.fill_color();
	assert_eq!(backend.seen, vec![("a_diffuse".to_owned(), (16, 8), gray), ("b_diffuse".to_owned(), (16, 8), gray)]);
	assert_eq!(outcome.images.len(), 2);
	assert!(outcome.images.iter().all(|&img| scene.ctx.image(img).size() == (8, 4)));
}

#[test]
fn dust_cage_mismatch() {
	let mut scene = Scene::new(&["crate_low", "crate_low2", "crate_high", "crate_cage"]);
	let mut sets = scene.sets();
	assert_eq!(sets.len(), 2);
	// put both low-poly objects in one set with a single cage
	let low2 = scene.id("crate_low2");
	sets[0].objects_low.push(low2);
	sets.truncate(1);

	let high = scene.id("crate_high");
	scene.ctx.select(high);
	scene.ctx.set_active(Some(high));
	let before = scene.ctx.selection_state();

	let mut backend = RecordingBackend::new();
	let err = scene.bake(&mut backend, &BakeRequest::new("dust", (16, 16)), &sets).unwrap_err();

	assert_eq!(err.validation_kind(), Some(ValidationKind::CageMismatch));
	assert!(err.to_string().contains("crate"));
	assert_eq!(err.kind(), "ERROR_INVALID_INPUT");
	assert!(backend.calls.is_empty());
	assert_eq!(scene.ctx.image_count(), 0);
	assert_eq!(scene.ctx.selection_state(), before);
}

#[test]
fn no_low_poly() {
	let mut scene = Scene::new(&["crate_high"]);
	let mut backend = RecordingBackend::new();
	let sets = scene.sets();
	let err = scene.bake(&mut backend, &BakeRequest::new("ao", (16, 16)), &sets).unwrap_err();
	assert_eq!(err.validation_kind(), Some(ValidationKind::NoLowPoly));
	assert!(backend.calls.is_empty());
}

#[test]
fn missing_uv_map() {
	let mut scene = Scene::new(&["crate_low"]);
	let low = scene.id("crate_low");
	scene.ctx.object_mut(low).mesh.uv_layers.clear();
	let sets = scene.sets();
	let err = scene.bake(&mut RecordingBackend::new(), &BakeRequest::new("ao", (16, 16)), &sets).unwrap_err();
	assert_eq!(err.validation_kind(), Some(ValidationKind::NoUvMap));
	assert!(err.to_string().contains("crate_low"));
}

#[test]
fn failure_aborts_and_restores_state() {
	let mut scene = Scene::new(&["a_low", "b_low", "c_low"]);
	scene.ctx.set_mode(InteractionMode::Edit);
	scene.ctx.render.samples = 7;
	let before = scene.ctx.selection_state();

	let mut backend = RecordingBackend::failing_on("b_low");
	let sets = scene.sets();
	let err = scene.bake(&mut backend, &BakeRequest::new("normal_object", (16, 16)), &sets).unwrap_err();

	match &err {
		BakeError::BakeExecution { set, object, .. } => {
			assert_eq!(set, "b");
			assert_eq!(object, "b_low");
		}
		other => panic!("unexpected error: {other}"),
	}
	// set `a` was baked, set `c` never started
	assert_eq!(backend.calls.len(), 1);
	assert!(scene.ctx.image_by_name("c_normal_object").is_none());
	assert_eq!(scene.ctx.selection_state(), before);
	assert_eq!(scene.ctx.render.samples, 7);
}

#[test]
fn cages_and_floaters() {
	let mut scene = Scene::new(&["crate_low", "crate_high", "crate_cage", "crate_float"]);
	let mut backend = RecordingBackend::new();
	let sets = scene.sets();
	let outcome = scene.bake(&mut backend, &BakeRequest::new("wear", (16, 16)), &sets).unwrap();

	assert_eq!(outcome.passes, 2);
	for call in &backend.calls {
		assert_eq!(call.params.cage_object.as_deref(), Some("crate_cage"));
		assert_eq!(call.params.cage_extrusion, 0.0);
		assert!(call.params.use_cage);
	}
	assert_eq!(backend.calls[1].selected, vec!["crate_low".to_owned(), "crate_float".to_owned()]);
	assert_eq!(scene.slots("crate_float"), vec!["bake_wear"]);
}

#[test]
fn preview_ao_end_to_end() {
	let mut scene = Scene::new(&["panel_low"]);
	let request = BakeRequest {
		samples: 4,
		sampling_scale: 2,
		..BakeRequest::new("ao", (4, 4))
	};
	let sets = scene.sets();
	let outcome = scene.bake(&mut PreviewBackend::new(1), &request, &sets).unwrap();

	let img = scene.ctx.image(outcome.images[0]);
	assert_eq!(img.size(), (4, 4));
	for (x, y) in [(0, 0), (3, 3), (1, 2)] {
		let c = img.at(x, y);
		assert!((c[0] - 1.0).abs() < 1e-5, "{c:?}");
	}
}

#[test]
fn preview_normal_high_to_low() {
	let mut scene = Scene::new(&["panel_low", "panel_high"]);
	let request = BakeRequest {
		ray_distance: 0.05,
		..BakeRequest::new("normal_object", (4, 4))
	};
	let sets = scene.sets();
	let outcome = scene.bake(&mut PreviewBackend::default(), &request, &sets).unwrap();
	let img = scene.ctx.image(outcome.images[0]);
	assert_eq!(img.at(2, 2), [0.5, 0.5, 1.0, 1.0]);
}

/// Two unit quads side by side, each mapped to one half of the texture.
fn two_panels(z: f32) -> Mesh {
	let mut positions = unit_quad(z).positions;
	positions.extend(unit_quad(z).positions.iter().map(|p| *p + Vec3::X));
	let half = |u: f32| -> SmallVec<[Vec2; 4]> { smallvec![vec2(u, 0.0), vec2(u + 0.5, 0.0), vec2(u + 0.5, 1.0), vec2(u, 1.0)] };
	Mesh::new(positions, vec![Face::new(&[0, 1, 2, 3]), Face::new(&[4, 5, 6, 7])]).with_uv_layer("UVMap", vec![half(0.0), half(0.5)])
}

/// Sets `a` and `b`, both made of objects called `low`, `high` and `cage`.
/// Set `b` has twice as many vertices as set `a`.
fn sets_with_shared_names() -> (Scene, Vec<BakeSet>) {
	let mut ctx = RenderContext::new();
	let mut sets = vec![];
	for (name, mesh) in [("a", unit_quad as fn(f32) -> Mesh), ("b", two_panels as fn(f32) -> Mesh)] {
		let low = ctx.add_object(MeshObject::new("low", mesh(0.0)));
		let high = ctx.add_object(MeshObject::new("high", mesh(0.05)));
		let cage = ctx.add_object(MeshObject::new("cage", mesh(0.1)));
		sets.push(BakeSet::new(name).with(Role::Low, &[low]).with(Role::High, &[high]).with(Role::Cage, &[cage]));
	}
	let scene = Scene {
		ctx,
		pack: MaterialPack::bundled().unwrap(),
	};
	(scene, sets)
}

#[test]
fn sets_with_same_object_names_use_their_own_cage() {
	let (mut scene, sets) = sets_with_shared_names();
	let mut backend = RecordingBackend::new();
	scene.bake(&mut backend, &BakeRequest::new("ao", (8, 8)), &sets).unwrap();
	assert_eq!(backend.calls[0].params.cage_object.as_deref(), Some("cage"));
	assert_eq!(backend.calls[1].params.cage_object.as_deref(), Some("cage.001"));
	assert_eq!(backend.calls[1].active.as_deref(), Some("low.001"));

	let (mut scene, sets) = sets_with_shared_names();
	let outcome = scene.bake(&mut PreviewBackend::default(), &BakeRequest::new("ao", (8, 8)), &sets).unwrap();
	assert_eq!(outcome.passes, 2);
	assert_eq!(outcome.images.len(), 2);
}

#[test]
fn empty_material_slot_gets_the_bake_target() {
	let mut scene = Scene::new(&["crate_low"]);
	let low = scene.id("crate_low");
	scene.ctx.object_mut(low).material_slots = vec![None];
	let mut backend = RecordingBackend::new();
	let sets = scene.sets();
	scene.bake(&mut backend, &BakeRequest::new("ao", (8, 8)), &sets).unwrap();

	assert_eq!(backend.calls[0].target.as_deref(), Some("crate_ao"));
	assert_eq!(scene.slots("crate_low"), vec!["bake_target"]);
}

use super::internal::*;

/// Load all objects from a Wavefront OBJ file.
///
/// Each OBJ object becomes one `MeshObject`, named after the file
/// (`crate_low.obj` => `crate_low`) or, for files with several objects,
/// after the file and the object (`crate_low.Handle`).
/// Objects are loaded without material slots.
pub fn load_obj(path: &Path) -> Result<Vec<MeshObject>> {
	log::info!("loading {}", path.to_string_lossy());
	let opts = tobj::LoadOptions {
		triangulate: false,
		single_index: false,
		..default()
	};
	let (models, _materials) = tobj::load_obj(path, &opts).map_err(|e| anyhow!("load {path:?}: {e}"))?;
	if models.is_empty() {
		return Err(anyhow!("load {path:?}: no objects"));
	}

	let stem = path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
	let single = models.len() == 1;
	models
		.iter()
		.map(|model| {
			let name = match single {
				true => stem.clone(),
				false => format!("{stem}.{}", model.name),
			};
			Ok(MeshObject::new(name, convert_mesh(&model.mesh).with_context(|| format!("{path:?}: object {}", model.name))?))
		})
		.collect()
}

fn convert_mesh(m: &tobj::Mesh) -> Result<Mesh> {
	let positions = m.positions.chunks_exact(3).map(|p| vec3(p[0], p[1], p[2])).collect::<Vec<_>>();

	// face arities are omitted when all faces are triangles
	let arities = match m.face_arities.is_empty() {
		true => vec![3; m.indices.len() / 3],
		false => m.face_arities.clone(),
	};

	let material = m.material_id.unwrap_or(0) as u32;
	let has_uvs = !m.texcoords.is_empty() && m.texcoord_indices.len() == m.indices.len();
	let uv = |corner: usize| {
		let i = m.texcoord_indices[corner] as usize;
		vec2(m.texcoords[2 * i], m.texcoords[2 * i + 1])
	};

	let mut faces = Vec::with_capacity(arities.len());
	let mut uvs = Vec::with_capacity(arities.len());
	let mut start = 0;
	for arity in arities {
		let end = start + arity as usize;
		if end > m.indices.len() {
			return Err(anyhow!("face indices out of range"));
		}
		if m.indices[start..end].iter().any(|&v| v as usize >= positions.len()) {
			return Err(anyhow!("vertex index out of range"));
		}
		faces.push(Face::new(&m.indices[start..end]).with_material(material));
		if has_uvs {
			uvs.push((start..end).map(&uv).collect());
		}
		start = end;
	}

	let mesh = Mesh::new(positions, faces);
	Ok(match has_uvs {
		true => mesh.with_uv_layer("UVMap", uvs),
		false => mesh,
	})
}

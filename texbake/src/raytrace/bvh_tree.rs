use super::internal::*;

/// Node in a Bounding Volume Hierarchy (BHV).
/// https://en.wikipedia.org/wiki/Bounding_volume_hierarchy
pub enum Node<T> {
	Inner(Box<[(BoundingBox, Node<T>); 2]>),
	Leaf([T; 2]),
}

impl<T> Node<T>
where
	T: Clone + Default + Bounded,
{
	pub fn build_tree(nodes: Vec<T>) -> Self {
		if nodes.len() <= 2 {
			Self::build_leaf(nodes)
		} else {
			Self::build_inner(nodes)
		}
	}

	fn build_leaf(nodes: Vec<T>) -> Self {
		debug_assert!(nodes.len() <= 2);
		// A Default (degenerate) element stands in for missing children.
		// It can never intersect a Ray.
		let mut nodes = nodes.into_iter();
		Node::Leaf([nodes.next().unwrap_or_default(), nodes.next().unwrap_or_default()])
	}

	fn build_inner(nodes: Vec<T>) -> Self {
		debug_assert!(nodes.len() > 2);

		// split along the longest direction,
		// to end up with roughly cubical children.
		let hull = BoundingBox::union(nodes.iter().map(T::bounds));
		let split_dir = hull.longest_axis();

		let mut nodes = nodes;
		nodes.sort_by(|a, b| a.bounds().center()[split_dir].total_cmp(&b.bounds().center()[split_dir]));

		let right = nodes.split_off(nodes.len() / 2);
		let left = nodes;
		let bb_left = BoundingBox::union(left.iter().map(T::bounds));
		let bb_right = BoundingBox::union(right.iter().map(T::bounds));

		Node::Inner(Box::new([(bb_left, Node::build_tree(left)), (bb_right, Node::build_tree(right))]))
	}
}

/// A Node of things that can intersect, can intersect itself.
/// E.g., we can intersect with a Node of Triangles.
impl<T, A> Intersect for Node<T>
where
	T: Intersect<Attrib = A>,
	A: Clone,
{
	type Attrib = A;

	fn intersect(&self, r: &Ray, hr: &mut HitRecord<A>) -> bool {
		match self {
			Node::Inner(ch) => {
				let mut hit = false;
				for (bb, child) in ch.iter() {
					if bb.intersects(r) {
						hit |= child.intersect(r, hr);
					}
				}
				hit
			}
			Node::Leaf(ch) => ch[0].intersect(r, hr) | ch[1].intersect(r, hr),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	// row of unit triangles along x, facing +z
	fn row(n: usize) -> Vec<Triangle> {
		(0..n)
			.map(|i| {
				let x = i as f32;
				Triangle::new([vec3(x, 0.0, 0.0), vec3(x + 1.0, 0.0, 0.0), vec3(x, 1.0, 0.0)], i)
			})
			.collect()
	}

	#[test]
	fn finds_every_triangle() {
		let tree = Node::build_tree(row(13));
		for i in 0..13 {
			let r = Ray::new(vec3(i as f32 + 0.25, 0.25, 1.0), -Vec3::Z);
			assert_eq!(tree.intersection(&r).attrib.map(|h| h.id), Some(i));
		}
		assert!(tree.intersection(&Ray::new(vec3(-1.0, 0.25, 1.0), -Vec3::Z)).attrib.is_none());
	}

	#[test]
	fn nearest_wins() {
		let mut tris = row(1);
		tris.push(Triangle::new(tris[0].verts.map(|v| v + Vec3::Z), 1));
		tris.push(Triangle::new(tris[0].verts.map(|v| v + 2.0 * Vec3::Z), 2));
		let tree = Node::build_tree(tris);
		let hr = tree.intersection(&Ray::new(vec3(0.25, 0.25, 5.0), -Vec3::Z));
		assert_eq!(hr.attrib.map(|h| h.id), Some(2));
		assert_eq!(hr.maybe_t(), Some(3.0));
	}

	#[test]
	fn empty_tree() {
		let tree = Node::<Triangle>::build_tree(vec![]);
		assert!(tree.intersection(&Ray::new(Vec3::ZERO, Vec3::Z)).attrib.is_none());
	}
}

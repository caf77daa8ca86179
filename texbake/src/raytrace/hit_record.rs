/// Nearest intersection found so far.
#[derive(Debug)]
pub struct HitRecord<A>
where
	A: Clone, // The type of the attribute. Cloned only when an intersection is in front of the previous HitRecord.
{
	pub t: f32,            // Intersection distance. Starts off with infinity, or the maximum distance.
	pub attrib: Option<A>, // Data corresponding to the hit (if any). E.g.: barycentric coordinates, triangle ID,...
}

impl<A> HitRecord<A>
where
	A: Clone,
{
	#[inline]
	pub fn new() -> Self {
		Self::within(f32::INFINITY)
	}

	/// A record that only accepts hits closer than `max_t`.
	#[inline]
	pub fn within(max_t: f32) -> Self {
		Self { t: max_t, attrib: None }
	}

	#[inline]
	pub fn maybe_t(&self) -> Option<f32> {
		self.attrib.as_ref().map(|_| self.t)
	}

	#[inline]
	pub fn record(&mut self, t: f32, attrib: &A) {
		if t < self.t {
			self.t = t;
			self.attrib = Some(attrib.clone()); // Clone only when it will be used.
		}
	}
}

impl<A: Clone> Default for HitRecord<A> {
	fn default() -> Self {
		Self::new()
	}
}

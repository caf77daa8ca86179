use super::internal::*;

/// Grow covered texels `margin` texels into uncovered ones.
/// Each step, an uncovered texel next to covered ones gets their average.
pub fn dilate(texels: &mut [Option<Rgba>], size: (u32, u32), margin: u32) {
	let (w, h) = (size.0 as usize, size.1 as usize);
	debug_assert_eq!(texels.len(), w * h);

	for _ in 0..margin {
		let prev = texels.to_vec();
		let mut grown = false;
		for y in 0..h {
			for x in 0..w {
				let i = y * w + x;
				if prev[i].is_some() {
					continue;
				}
				let neighbors = [(x.wrapping_sub(1), y), (x + 1, y), (x, y.wrapping_sub(1)), (x, y + 1)];
				let colors = neighbors.into_iter().filter(|&(x, y)| x < w && y < h).filter_map(|(x, y)| prev[y * w + x]).collect::<SmallVec<[Rgba; 4]>>();
				if !colors.is_empty() {
					let n = colors.len() as f32;
					texels[i] = Some([0, 1, 2, 3].map(|c| colors.iter().map(|color| color[c]).sum::<f32>() / n));
					grown = true;
				}
			}
		}
		if !grown {
			break;
		}
	}
}

use fastrand::Rng;

use crate::color::VertexId;
use crate::compact_instance::CompactInstance;
use crate::error::Error;


/** complete multipartite graph: one independent set per entry of `sizes`
(vertices numbered consecutively), every pair of vertices from distinct parts is adjacent.
*/
pub fn complete_multipartite(sizes:&[usize]) -> CompactInstance {
    let n:usize = sizes.iter().sum();
    let mut part:Vec<usize> = Vec::with_capacity(n); // part[v]: index of the part containing v
    for (p,size) in sizes.iter().enumerate() {
        part.extend(std::iter::repeat(p).take(*size));
    }
    let adj_list:Vec<Vec<VertexId>> = (0..n).map(|u| {
        (0..n).filter(|v| part[*v] != part[u]).collect()
    }).collect();
    CompactInstance::new(adj_list)
}

/** Turán graph T(n,k): complete k-partite graph whose parts have sizes as equal as possible */
pub fn turan_graph(n:usize, k:usize) -> CompactInstance {
    let sizes:Vec<usize> = (0..k).map(|p| n/k + usize::from(p < n%k)).collect();
    complete_multipartite(&sizes)
}

/** random k-partite graph with at most `max_vertices` vertices.
draws n ∈ [2, max_vertices] and k ∈ [5, 10] until k divides n, then builds
(coin toss) either a complete multipartite graph with equal parts or the Turán graph T(n,k).
returns the graph and k, an upper bound of its chromatic number.
*/
pub fn random_k_partite(max_vertices:usize, rng:&mut Rng) -> Result<(CompactInstance, usize), Error> {
    if max_vertices < 5 {
        return Err(Error::InvalidParameter(format!(
            "random k-partite graphs need at least 5 vertices (got {})", max_vertices
        )));
    }
    let (n,k) = loop {
        let n = rng.usize(2..=max_vertices);
        let k = rng.usize(5..=10);
        if n % k == 0 { break (n,k); }
    };
    log::info!("random graph: {} vertices, {} parts", n, k);
    let inst = if rng.bool() {
        complete_multipartite(&vec![n/k ; k])
    } else {
        turan_graph(n, k)
    };
    Ok((inst, k))
}

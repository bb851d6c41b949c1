use crate::domain::condensation::ComponentId;
use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::SccDetector;

const UNASSIGNED: usize = usize::MAX;

pub struct KosarajuSccDetector;

impl SccDetector for KosarajuSccDetector {
    fn compute_scc(&self, graph: &Graph) -> SccResult {
        kosaraju_scc(graph)
    }
}

fn kosaraju_scc(graph: &Graph) -> SccResult {
    let n = graph.node_count();
    let rev = transpose(graph);

    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut seen = vec![false; n];

    // Only nodes with recorded out-edges start a traversal; target-only
    // nodes are reached from their sources, isolated ones never are.
    for start in 0..n {
        if seen[start] || graph.edges[start].is_empty() {
            continue;
        }
        iterative_finish_order(start, &graph.edges, &mut seen, &mut order);
    }

    let mut component_of = vec![UNASSIGNED; n];
    let mut components: Vec<Vec<usize>> = Vec::new();

    // Pop the finishing stack: latest finisher first.
    for &v in order.iter().rev() {
        if component_of[v] != UNASSIGNED {
            continue;
        }

        let cid = components.len();
        let mut stack = vec![v];
        component_of[v] = cid;
        let mut comp = Vec::new();

        while let Some(x) = stack.pop() {
            comp.push(x);
            for &p in rev[x].iter() {
                if component_of[p] == UNASSIGNED {
                    component_of[p] = cid;
                    stack.push(p);
                }
            }
        }

        components.push(comp);
    }

    let cyclic_component = components
        .iter()
        .map(|comp| match comp.as_slice() {
            [only] => graph.edges[*only].contains(only),
            _ => true,
        })
        .collect();

    SccResult {
        component_of: component_of
            .into_iter()
            .map(|c| (c != UNASSIGNED).then_some(ComponentId(c)))
            .collect(),
        components,
        cyclic_component,
    }
}

fn transpose(graph: &Graph) -> Vec<Vec<usize>> {
    let mut rev: Vec<Vec<usize>> = vec![Vec::new(); graph.node_count()];

    for (u, outs) in graph.edges.iter().enumerate() {
        for &v in outs {
            rev[v].push(u);
        }
    }

    for outs in rev.iter_mut() {
        outs.sort_unstable();
        outs.dedup();
    }

    rev
}

fn iterative_finish_order(
    start: usize,
    edges: &[Vec<usize>],
    seen: &mut [bool],
    order: &mut Vec<usize>,
) {
    let mut stack: Vec<(usize, usize)> = Vec::new();
    stack.push((start, 0));

    while let Some((v, next_i)) = stack.pop() {
        seen[v] = true;

        if next_i < edges[v].len() {
            let to = edges[v][next_i];
            stack.push((v, next_i + 1));
            if !seen[to] {
                stack.push((to, 0));
            }
            continue;
        }

        order.push(v);
    }
}

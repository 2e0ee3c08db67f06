use proptest::{option, prelude::*};
use sapling::{BinaryTree, Collect, Node, Order};

fn arb_node() -> impl Strategy<Value = Node<u8>> {
    any::<u8>()
        .prop_map(Node::new)
        .prop_recursive(6, 64, 2, |inner| {
            (any::<u8>(), option::of(inner.clone()), option::of(inner)).prop_map(
                |(value, left, right)| {
                    let mut node = Node::new(value);
                    node.left = left.map(Box::new);
                    node.right = right.map(Box::new);
                    node
                },
            )
        })
}

fn arb_tree() -> impl Strategy<Value = BinaryTree<u8>> {
    option::of(arb_node()).prop_map(|root| BinaryTree {
        root: root.map(Box::new),
    })
}

fn count(node: Option<&Node<u8>>) -> usize {
    node.map_or(0, |node| 1 + count(node.left()) + count(node.right()))
}

fn mirror(node: &Node<u8>) -> Node<u8> {
    let mut mirrored = Node::new(node.value);
    mirrored.left = node.right().map(|x| Box::new(mirror(x)));
    mirrored.right = node.left().map(|x| Box::new(mirror(x)));
    mirrored
}

fn reversed<T>(mut values: Vec<T>) -> Vec<T> {
    values.reverse();
    values
}

proptest! {
    #[test]
    fn every_order_visits_every_node_once(tree in arb_tree()) {
        let expected = count(tree.root());
        for order in Order::ALL.iter().copied() {
            prop_assert_eq!(tree.traverse(order, Collect::new()).len(), expected);
        }
        prop_assert_eq!(tree.len(), expected);
    }

    #[test]
    fn traversals_are_repeatable(tree in arb_tree()) {
        for order in Order::ALL.iter().copied() {
            prop_assert_eq!(
                tree.traverse(order, Collect::new()),
                tree.traverse(order, Collect::new()),
            );
        }
    }

    #[test]
    fn mirroring_reverses_depth_first_orders(root in arb_node()) {
        let tree = BinaryTree::with_root(root.clone());
        let mirrored = BinaryTree::with_root(mirror(&root));
        prop_assert_eq!(mirrored.pre_order(), reversed(tree.post_order()));
        prop_assert_eq!(mirrored.in_order(), reversed(tree.in_order()));
        prop_assert_eq!(mirrored.post_order(), reversed(tree.pre_order()));
    }

    #[test]
    fn pre_order_splits_into_subtrees(root in arb_node()) {
        let tree = BinaryTree::with_root(root);
        let root = tree.root();
        let mut expected = root.map(|x| &x.value).into_iter().collect::<Vec<_>>();
        expected.extend(tree.pre_order_from(root.and_then(Node::left)));
        expected.extend(tree.pre_order_from(root.and_then(Node::right)));
        prop_assert_eq!(tree.pre_order(), expected);
    }

    #[test]
    fn post_order_ends_with_root(root in arb_node()) {
        let tree = BinaryTree::with_root(root);
        let value = tree.root().map(|x| &x.value);
        prop_assert_eq!(tree.post_order().last().copied(), value);
        prop_assert_eq!(tree.bfs().first().copied(), value);
    }

    #[test]
    fn levels_flatten_into_bfs(tree in arb_tree()) {
        let levels = tree.levels();
        prop_assert_eq!(levels.len(), tree.height());
        prop_assert!(levels.iter().all(|level| !level.is_empty()));
        prop_assert_eq!(levels.concat(), tree.bfs());
        prop_assert_eq!(tree.level_order().collect::<Vec<_>>(), tree.bfs());
    }
}

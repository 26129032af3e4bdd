mod test_navigation;

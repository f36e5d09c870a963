mod translator;
